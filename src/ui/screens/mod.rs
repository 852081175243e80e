mod failed;

pub(crate) use failed::render_failed;
