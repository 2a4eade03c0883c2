//! stdio hosting adapter
//!
//! stdin: 1行1リクエスト（GatewayRequest JSON） → stdout: 1行1レスポンス（GatewayResponse JSON）

use http::StatusCode;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::application::service::BookService;
use crate::config::Config;
use crate::domain::repository::BookRepository;
use crate::infra::json_store::JsonBookRepository;

use super::error_log::{ErrorLog, LogErrorLog};
use super::gateway::{GatewayRequest, GatewayResponse};
use super::responder::client_error;
use super::router::Router;

// =============================================================================
// Public entry point
// =============================================================================

/// JSON StoreとログベースのErrorLogでRouterを組み立て、stdin/stdoutで待ち受ける。
pub async fn run(config: Config) -> anyhow::Result<()> {
    log::info!(
        "event=start store={} isbn_match={} version={}",
        config.store_path.display(),
        config.isbn_match,
        env!("CARGO_PKG_VERSION")
    );

    let repo = JsonBookRepository::new(&config.store_path).with_isbn_match(config.isbn_match);
    let service = BookService::new(repo).with_isbn_match(config.isbn_match);
    let router = Router::new(service, LogErrorLog);

    let handled = serve(&router, tokio::io::stdin(), tokio::io::stdout()).await?;
    log::info!("event=stop handled={handled}");
    Ok(())
}

/// 入力が尽きるまで処理し、処理したリクエスト数を返す。空行は無視する。
pub async fn serve<R, L, I, O>(router: &Router<R, L>, input: I, mut output: O) -> anyhow::Result<usize>
where
    R: BookRepository,
    L: ErrorLog,
    I: AsyncRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(router, &line);
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        output.write_all(&encoded).await?;
        output.flush().await?;
        handled += 1;
    }

    Ok(handled)
}

/// 1行をデコードしてRouterへ渡す。デコードできなければ400。
pub fn handle_line<R: BookRepository, L: ErrorLog>(
    router: &Router<R, L>,
    line: &str,
) -> GatewayResponse {
    match serde_json::from_str::<GatewayRequest>(line) {
        Ok(req) => router.route(&req),
        Err(e) => {
            log::warn!("event=malformed_request error={e}");
            client_error(StatusCode::BAD_REQUEST)
        }
    }
}
