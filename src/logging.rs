
pub fn log_event(component: &str, subject: &str, event: &str, message: &str) {
    println!(
        "[{}][{}][{}] {}",
        component,
        subject,
        event,
        message
    );
}
