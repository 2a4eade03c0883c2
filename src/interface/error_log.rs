/// サーバ側障害の記録先。1回の呼び出しにつき1レコード、握りつぶさない。
pub trait ErrorLog {
    fn record(&self, message: &str);
}

impl<L: ErrorLog + ?Sized> ErrorLog for &L {
    fn record(&self, message: &str) {
        (**self).record(message);
    }
}

/// `log` facade へ `error` レベルで流す本番用実装。
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorLog;

impl ErrorLog for LogErrorLog {
    fn record(&self, message: &str) {
        log::error!("{message}");
    }
}
