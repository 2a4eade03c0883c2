//! Process logger bootstrap.
//!
//! stderrへ `detailed_format`（タイムスタンプ・レベル・file:line）で出力する。
//! stdoutはレスポンス専用のためログを書かない。

use flexi_logger::{Logger, LoggerHandle};

/// ロガーを起動する。返したハンドルはプロセス終了まで保持すること。
pub fn init_logging(level: &str) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    Logger::try_with_str(level)?
        .log_to_stderr()
        .format(flexi_logger::detailed_format)
        .start()
}
