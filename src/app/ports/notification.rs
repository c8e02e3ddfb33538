/// User-visible feedback (toasts).
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}
