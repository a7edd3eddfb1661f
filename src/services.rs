/// Settlement notifications, the `alert()` of the original form. The
/// presentation layer supplies a real implementation; the stub logs.
pub trait Notifier: Send {
    fn notify_success(&mut self, message: &str);
    fn notify_failure(&mut self, message: &str);
}

#[derive(Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn notify_failure(&mut self, message: &str) {
        log::warn!("{message}");
    }
}
