use crate::core::Notifier;

/// 終端機通知：成功寫到 stdout，錯誤寫到 stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::info!("🔔 success: {}", message);
        println!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        tracing::info!("🔔 error: {}", message);
        eprintln!("❌ {}", message);
    }
}
