use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::io::AsyncBufReadExt;
use tokio::time::sleep;

use crate::{
    convert::{Converter, Step},
    error::{ConvertError, Result},
    spotify,
    uri::UriKind,
    warning,
};

/// Run configuration resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Kind pinned up front; `None` lets the first URI decide.
    pub kind: Option<UriKind>,
    pub csv: bool,
    /// Seconds to pause after each batch request.
    pub delay: u64,
}

/// Pass-through options handed verbatim to the HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    pub proxy: Option<String>,
    pub timeout: Option<u64>,
    /// `NAME:VALUE` pairs attached to every request.
    pub headers: Vec<String>,
}

impl HttpOptions {
    pub fn build_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        for raw in &self.headers {
            let (name, value) = raw.split_once(':').ok_or_else(|| {
                ConvertError::Usage(format!("malformed header '{raw}', expected NAME:VALUE"))
            })?;
            let name = HeaderName::from_bytes(name.trim().as_bytes())
                .map_err(|_| ConvertError::Usage(format!("invalid header name in '{raw}'")))?;
            let value = HeaderValue::from_str(value.trim())
                .map_err(|_| ConvertError::Usage(format!("invalid header value in '{raw}'")))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}

/// Converts every URI in the given files, or from standard input when no
/// files are named.
///
/// Files are read fully in order, each one consumed before the next. Per
/// stream, a blank line ends accumulation early and end of stream flushes
/// the partial batch, so a contiguous run of remote URIs is always looked
/// up before any following local line is emitted.
pub async fn convert(files: Vec<PathBuf>, options: ConvertOptions, http: HttpOptions) -> Result<()> {
    let client = http.build_client()?;
    let mut session = Session {
        converter: Converter::new(options.kind, options.csv),
        client,
        token: None,
        delay: options.delay,
    };

    if files.is_empty() {
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                break;
            }
            session.handle_line(&line).await?;
        }
        session.flush_rest().await?;
    } else {
        for file in &files {
            let content = async_fs::read_to_string(file).await?;
            for line in content.lines() {
                if line.trim().is_empty() {
                    break;
                }
                session.handle_line(line).await?;
            }
            session.flush_rest().await?;
        }
    }

    Ok(())
}

/// Per-run driver state: the converter session plus everything needed to
/// turn its flush steps into network calls.
struct Session {
    converter: Converter,
    client: Client,
    token: Option<String>,
    delay: u64,
}

impl Session {
    async fn handle_line(&mut self, line: &str) -> Result<()> {
        match self.converter.accept(line)? {
            Step::Buffered => Ok(()),
            Step::Flush(ids) => self.lookup_and_emit(&ids).await,
            Step::Emit { pending, line } => {
                if let Some(ids) = pending {
                    self.lookup_and_emit(&ids).await?;
                }
                println!("{}", line);
                Ok(())
            }
        }
    }

    async fn flush_rest(&mut self) -> Result<()> {
        if let Some(ids) = self.converter.take_batch() {
            self.lookup_and_emit(&ids).await?;
        }
        Ok(())
    }

    /// Token acquisition is lazy so an all-local run never touches the
    /// network; once fetched, the token serves every later batch.
    async fn ensure_token(&mut self) -> Result<String> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }

        let token = spotify::auth::access_token(&self.client).await?;
        self.token = Some(token.clone());
        Ok(token)
    }

    async fn lookup_and_emit(&mut self, ids: &[String]) -> Result<()> {
        let token = self.ensure_token().await?;
        let kind = self.converter.kind();

        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Looking up {} {}s...", ids.len(), kind));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let result = spotify::lookup::get_several(&self.client, &token, kind, ids).await;
        pb.finish_and_clear();
        let items = result?;

        if items.iter().all(|slot| slot.is_none()) {
            warning!(
                "No {}s matched this batch of {} ids; skipping.",
                kind,
                ids.len()
            );
        } else {
            for line in self.converter.format_items(&items) {
                println!("{}", line);
            }
        }

        if self.delay > 0 {
            sleep(Duration::from_secs(self.delay)).await;
        }

        Ok(())
    }
}
