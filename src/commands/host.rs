use std::io::Write;

/// Where command output goes and how the process ends.
///
/// The binary forwards to the real stdout/stderr; tests capture into buffers.
pub trait Host {
    fn output(&mut self) -> impl Write;
    fn error(&mut self) -> impl Write;
    fn exit(&mut self, code: i32);
}
