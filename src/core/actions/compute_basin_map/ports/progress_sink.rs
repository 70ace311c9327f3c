/// Receives sweep progress.
///
/// `Some(fraction)` is the share of rows finished so far, in `[0, 1)`.
/// `None` is sent exactly once, when the row loop has exited for any reason.
pub trait ProgressSink {
    fn report(&self, progress: Option<f64>);
}

impl<F> ProgressSink for F
where
    F: Fn(Option<f64>),
{
    fn report(&self, progress: Option<f64>) {
        self(progress)
    }
}
