use crate::value::Value;

/// A normalized argument vector entry.
///
/// `flagged` records whether the original text began with a dash. Dash
/// stripping alone is lossy: `--port 8080` and `port 8080` normalize to the
/// same payloads. Keeping the marker bit alongside the payload lets
/// unknown-flag detection skip tokens that never looked like flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: Value,
    pub flagged: bool,
}

impl Token {
    /// The text payload, if any.
    pub fn text(&self) -> Option<&str> {
        self.value.as_text()
    }
}

/// Strip leading option markers from every entry of an argument vector.
///
/// `--name` loses both dashes, `-n` loses its one, everything else passes
/// through unchanged. Order and length are preserved. A lone `-` normalizes
/// to an empty flagged token; that is deliberate, it surfaces later as the
/// unknown option `""` rather than vanishing.
pub fn normalize<I, T>(args: I) -> Vec<Token>
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    args.into_iter()
        .map(|arg| match arg.into() {
            Value::Text(s) => {
                if let Some(rest) = s.strip_prefix("--") {
                    Token {
                        value: Value::Text(rest.to_string()),
                        flagged: true,
                    }
                } else if let Some(rest) = s.strip_prefix('-') {
                    Token {
                        value: Value::Text(rest.to_string()),
                        flagged: true,
                    }
                } else {
                    Token {
                        value: Value::Text(s),
                        flagged: false,
                    }
                }
            }
            value => Token {
                value,
                flagged: false,
            },
        })
        .collect()
}
