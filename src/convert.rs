use crate::error::{ConvertError, Result};
use crate::types::LookupItem;
use crate::uri::{self, LocalUri, ParsedUri, UriKind};
use crate::utils;

/// Upper bound on identifiers per lookup request, imposed by the Web
/// API's batch endpoints.
pub const BATCH_LIMIT: usize = 50;

/// Outcome of feeding one input line to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Remote identifier buffered; nothing to emit yet.
    Buffered,
    /// The batch reached its cap and must be looked up now.
    Flush(Vec<String>),
    /// A locally-resolved output line. Any pending batch is surfaced
    /// first so output order follows input order.
    Emit {
        pending: Option<Vec<String>>,
        line: String,
    },
}

/// Converter session: the pinned URI kind, the in-progress batch and the
/// output mode. One per run; all state the conversion needs lives here
/// instead of in ambient variables.
pub struct Converter {
    kind: Option<UriKind>,
    csv: bool,
    batch: Vec<String>,
}

impl Converter {
    pub fn new(kind: Option<UriKind>, csv: bool) -> Self {
        Converter {
            kind,
            csv,
            batch: Vec::new(),
        }
    }

    /// Kind used for lookups. Defaults to track when only bare
    /// identifiers were ever seen.
    pub fn kind(&self) -> UriKind {
        self.kind.unwrap_or_default()
    }

    /// Classifies one input line and advances the session.
    ///
    /// Remote URIs pin or check the kind and buffer their identifier;
    /// the 50th buffered identifier turns into a `Flush`. Local URIs
    /// resolve immediately and carry out any pending batch with them.
    pub fn accept(&mut self, line: &str) -> Result<Step> {
        match uri::parse(line)? {
            ParsedUri::Local(local) => {
                let pending = self.take_batch();
                Ok(Step::Emit {
                    pending,
                    line: self.format_local(&local),
                })
            }
            ParsedUri::Remote { kind, id } => {
                self.pin_kind(kind, line)?;
                self.batch.push(id);
                if self.batch.len() >= BATCH_LIMIT {
                    Ok(Step::Flush(std::mem::take(&mut self.batch)))
                } else {
                    Ok(Step::Buffered)
                }
            }
        }
    }

    /// Drains the partial batch at end of stream.
    pub fn take_batch(&mut self) -> Option<Vec<String>> {
        if self.batch.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.batch))
        }
    }

    /// First remote URI fixes the kind for the rest of the run; later
    /// ones must agree. Bare identifiers pin the default since they have
    /// no textual form to infer from.
    fn pin_kind(&mut self, seen: Option<UriKind>, line: &str) -> Result<()> {
        match (self.kind, seen) {
            (Some(pinned), Some(seen)) if pinned != seen => Err(ConvertError::KindMismatch {
                expected: pinned.to_string(),
                found: seen.to_string(),
                uri: line.trim().to_string(),
            }),
            (None, Some(seen)) => {
                self.kind = Some(seen);
                Ok(())
            }
            (None, None) => {
                self.kind = Some(UriKind::default());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Formats a successful batch response in response order. `None`
    /// slots (unknown identifiers) contribute no line.
    pub fn format_items(&self, items: &[Option<LookupItem>]) -> Vec<String> {
        items
            .iter()
            .flatten()
            .map(|item| self.format_item(item))
            .collect()
    }

    fn format_item(&self, item: &LookupItem) -> String {
        let line = match self.kind() {
            UriKind::Artist => {
                if self.csv {
                    utils::csv_field(&item.name)
                } else {
                    item.name.clone()
                }
            }
            _ => {
                let artists = utils::join_artists(&item.artists);
                if self.csv {
                    if artists.is_empty() {
                        utils::csv_field(&item.name)
                    } else {
                        format!("{},{}", utils::csv_field(&artists), utils::csv_field(&item.name))
                    }
                } else {
                    format!("{} - {}", artists, item.name)
                }
            }
        };
        utils::postprocess(&line)
    }

    fn format_local(&self, local: &LocalUri) -> String {
        let line = match (&local.artist, self.csv) {
            (Some(artist), true) => format!(
                "{},{}",
                utils::csv_field(artist),
                utils::csv_field(&local.title)
            ),
            (Some(artist), false) => format!("{} - {}", artist, local.title),
            (None, true) => utils::csv_field(&local.title),
            (None, false) => local.title.clone(),
        };
        utils::postprocess(&line)
    }
}
