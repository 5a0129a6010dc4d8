/// Transient user notices (toasts in the browser).
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
