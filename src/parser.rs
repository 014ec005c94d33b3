use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::matcher::{name_matches, token_known};
use crate::token::{self, Token};
use crate::value::Value;

type Callback = Box<dyn FnMut(Option<Value>)>;
type UnknownCallback = Box<dyn FnMut(&[String])>;

struct Opt {
    default: Option<Value>,
    callback: Callback,
}

enum UnknownPolicy {
    /// Report the offending flags as a parse error.
    Fatal,
    /// Hand the offending flags to a caller-supplied hook; option
    /// callbacks are still skipped for that pass.
    Custom(UnknownCallback),
}

/// Callback-driven command-line option parser.
///
/// Options are registered with an optional default and a callback. A parse
/// pass normalizes the argument vector, rejects unknown flags, then invokes
/// every registered callback in registration order, passing the supplied
/// value or the default. Defaults always flow through the callback, so
/// setting up a default and reacting to a user override are the same code
/// path.
///
/// Not internally synchronized; a parser is meant to live through a single
/// startup phase under one owner.
///
/// ```
/// use optcall::OptParser;
///
/// let mut parser = OptParser::with_args(["--port", "8080"]);
/// parser.on_default("port", 80, |port| {
///     println!("listening on {}", port.unwrap());
/// });
/// parser.parse().unwrap();
/// ```
pub struct OptParser {
    tokens: Vec<Token>,
    opts: IndexMap<String, Opt>,
    unknown: UnknownPolicy,
}

impl Default for OptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OptParser {
    /// Create a parser holding an empty argument vector.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            opts: IndexMap::new(),
            unknown: UnknownPolicy::Fatal,
        }
    }

    /// Create a parser from the process arguments, program name excluded.
    pub fn from_env() -> Self {
        Self::with_args(std::env::args().skip(1))
    }

    /// Create a parser holding `args`, normalized once up front.
    pub fn with_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            tokens: token::normalize(args),
            opts: IndexMap::new(),
            unknown: UnknownPolicy::Fatal,
        }
    }

    /// Register `name` without a default value.
    ///
    /// The callback runs on every parse pass, receiving the supplied value
    /// or `None`. Registering a name twice replaces its default and
    /// callback but keeps the original slot in the invocation order.
    pub fn on<F>(&mut self, name: impl Into<String>, callback: F) -> &mut Self
    where
        F: FnMut(Option<Value>) + 'static,
    {
        self.insert(name.into(), None, Box::new(callback));
        self
    }

    /// Register `name` with a default used when the flag is absent or has
    /// no following value.
    pub fn on_default<F>(
        &mut self,
        name: impl Into<String>,
        default: impl Into<Value>,
        callback: F,
    ) -> &mut Self
    where
        F: FnMut(Option<Value>) + 'static,
    {
        self.insert(name.into(), Some(default.into()), Box::new(callback));
        self
    }

    /// Replace the unknown-flag policy.
    ///
    /// The hook receives the offending names, dash-stripped, in encounter
    /// order. With a hook installed a strict parse reports unknown flags
    /// here instead of failing; option callbacks are skipped either way.
    pub fn on_unknown<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&[String]) + 'static,
    {
        self.unknown = UnknownPolicy::Custom(Box::new(handler));
        self
    }

    fn insert(&mut self, name: String, default: Option<Value>, callback: Callback) {
        // IndexMap keeps the original slot on re-insertion, so invocation
        // order is fixed by first registration.
        self.opts.insert(name, Opt { default, callback });
    }

    /// Registered option names, in invocation order.
    pub fn opt_names(&self) -> impl Iterator<Item = &str> {
        self.opts.keys().map(String::as_str)
    }

    /// Flag-shaped tokens matching no registered option, in encounter
    /// order. Computed fresh on every call.
    ///
    /// Tokens that never carried a dash are plain values and are not
    /// candidates, which keeps `--port 8080` from reporting `8080`.
    pub fn unknown_opts(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|t| t.flagged)
            .filter_map(Token::text)
            .filter(|text| !token_known(text, self.opt_names()))
            .collect()
    }

    /// Whether any token matches `flag` under the abbreviation rule, so
    /// `flag_given("version")` holds for an argument vector of `["-v"]`.
    pub fn flag_given(&self, flag: &str) -> bool {
        self.tokens
            .iter()
            .filter_map(Token::text)
            .any(|text| name_matches(flag, text))
    }

    /// The token following the first exact occurrence of `name`.
    ///
    /// Abbreviations do not apply here; `v` never resolves a value for
    /// `version`. Returns `None` when the flag is absent or is the last
    /// token.
    pub fn opt_value(&self, name: &str) -> Option<&Value> {
        resolve(&self.tokens, name)
    }

    /// Parse the held argument vector.
    ///
    /// Unknown flags abort the pass before any option callback runs: the
    /// default policy returns [`ParseError::UnknownOptions`], a custom
    /// hook installed via [`on_unknown`](Self::on_unknown) is invoked
    /// instead. Otherwise every registered callback fires in registration
    /// order. Parsing retains no state besides the registry and the token
    /// vector, so repeated calls replay the same invocations.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let unknown: Vec<String> = self
            .unknown_opts()
            .into_iter()
            .map(str::to_string)
            .collect();

        if !unknown.is_empty() {
            debug!(flags = ?unknown, "unknown flags, skipping option callbacks");
            return match &mut self.unknown {
                UnknownPolicy::Fatal => Err(ParseError::UnknownOptions(unknown)),
                UnknownPolicy::Custom(handler) => {
                    handler(&unknown);
                    Ok(())
                }
            };
        }

        self.invoke_callbacks();
        Ok(())
    }

    /// Parse the held argument vector, treating unknown flags as noise.
    pub fn parse_lenient(&mut self) {
        self.invoke_callbacks();
    }

    /// Replace the argument vector, then parse.
    pub fn parse_args<I, T>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.tokens = token::normalize(args);
        self.parse()
    }

    /// Replace the argument vector, then parse ignoring unknown flags.
    pub fn parse_args_lenient<I, T>(&mut self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.tokens = token::normalize(args);
        self.parse_lenient();
    }

    fn invoke_callbacks(&mut self) {
        for (name, opt) in &mut self.opts {
            let value = resolve(&self.tokens, name)
                .cloned()
                .or_else(|| opt.default.clone());
            trace!(option = %name, value = ?value, "invoking option callback");
            (opt.callback)(value);
        }
    }
}

fn resolve<'t>(tokens: &'t [Token], name: &str) -> Option<&'t Value> {
    let at = tokens.iter().position(|t| t.text() == Some(name))?;
    tokens.get(at + 1).map(|t| &t.value)
}
