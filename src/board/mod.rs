pub(crate) mod render_loop;
pub(crate) mod trace_board;
