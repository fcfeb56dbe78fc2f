//! Request dispatch for one session
//!
//! Methods:
//! - categories: List category names
//! - select_category: Change the category selector
//! - units: Units of a category (default: the selected one)
//! - targets: Valid to-units for a from-unit
//! - convert: Convert a value and record it
//! - history: Conversions so far, as JSON or markdown
//! - pairs: Every supported (from, to) pair

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};
use tracing::{debug, warn};
use unitconv::{Renderer, Session};
use unitconv_core::{Category, ErrorReport, Unit};

use crate::config::Config;

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    fn new(id: Option<JsonValue>, outcome: Result<JsonValue, ErrorReport>) -> Self {
        let id = id.unwrap_or(JsonValue::Null);
        match outcome {
            Ok(result) => Response { id, result: Some(result), error: None },
            Err(error) => Response { id, result: None, error: Some(error) },
        }
    }
}

/// Owns the session for the lifetime of the connection
pub struct Handler {
    session: Session<'static>,
    precision: usize,
}

impl Handler {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(),
            precision: config.precision,
        }
    }

    pub fn session(&self) -> &Session<'static> {
        &self.session
    }

    /// Handle one input line. Blank lines produce no response.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let raw: JsonValue = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "malformed request");
                return Some(Response::new(None, Err(ErrorReport::parse_error(e.to_string()))));
            }
        };

        // Keep the caller's id even when the request shape is wrong
        let id = raw.get("id").cloned();
        match serde_json::from_value::<Request>(raw) {
            Ok(request) => Some(self.handle(&request)),
            Err(e) => {
                warn!(error = %e, "malformed request");
                Some(Response::new(id, Err(ErrorReport::parse_error(e.to_string()))))
            }
        }
    }

    pub fn handle(&mut self, request: &Request) -> Response {
        debug!(method = %request.method, "processing request");
        let params = Params(request.params.as_ref());

        let outcome = match request.method.as_str() {
            "categories" => Ok(json!(Category::ALL)),
            "select_category" => self.select_category(&params),
            "units" => self.units(&params),
            "targets" => self.targets(&params),
            "convert" => self.convert(&params),
            "history" => self.history(&params),
            "pairs" => {
                let pairs: Vec<_> = self.session.table().pairs().collect();
                Ok(json!(pairs))
            }
            other => Err(ErrorReport::unknown_method(other)),
        };

        if let Err(ref e) = outcome {
            debug!(method = %request.method, code = %e.code, "request failed");
        }
        Response::new(request.id.clone(), outcome)
    }

    fn select_category(&mut self, params: &Params) -> Result<JsonValue, ErrorReport> {
        let category: Category = params.text("category")?.parse()?;
        self.session.select_category(category);
        Ok(json!({
            "category": category,
            "units": self.session.from_units(),
        }))
    }

    fn units(&self, params: &Params) -> Result<JsonValue, ErrorReport> {
        let category = match params.optional_text("category")? {
            Some(name) => name.parse::<Category>()?,
            None => self.session.category(),
        };
        Ok(json!(category.units()))
    }

    fn targets(&self, params: &Params) -> Result<JsonValue, ErrorReport> {
        let from: Unit = params.text("from")?.parse()?;
        Ok(json!(self.session.target_units(from)))
    }

    fn convert(&mut self, params: &Params) -> Result<JsonValue, ErrorReport> {
        let value = params.number("value")?;
        if !value.is_finite() || value < 0.0 {
            return Err(ErrorReport::invalid_value(value.to_string()));
        }
        let from: Unit = params.text("from")?.parse()?;
        let to: Unit = params.text("to")?.parse()?;

        // An overflowing result cannot be carried as a JSON number
        let result = self.session.table().convert(value, from, to)?;
        if !result.is_finite() {
            return Err(ErrorReport::invalid_value(format!("{} {} is out of range in {}", value, from, to)));
        }

        let record = self.session.convert(value, from, to)?;
        Ok(json!({
            "record": record,
            "display": record.display(self.precision),
        }))
    }

    fn history(&self, params: &Params) -> Result<JsonValue, ErrorReport> {
        match params.optional_text("format")?.unwrap_or("json") {
            "json" => Ok(json!(self.session.history())),
            "markdown" => {
                let table = Renderer::with_precision(self.precision).history_table(self.session.history());
                Ok(JsonValue::String(table))
            }
            other => Err(ErrorReport::invalid_params(format!("unknown history format '{}'", other))
                .with_suggestion("Use \"json\" or \"markdown\"")),
        }
    }
}

/// Accessors over a request's params object
struct Params<'a>(Option<&'a JsonValue>);

impl<'a> Params<'a> {
    fn object(&self) -> Option<&'a Map<String, JsonValue>> {
        self.0.and_then(|p| p.as_object())
    }

    fn get(&self, name: &str) -> Option<&'a JsonValue> {
        self.object().and_then(|o| o.get(name))
    }

    fn text(&self, name: &str) -> Result<&'a str, ErrorReport> {
        self.optional_text(name)?
            .ok_or_else(|| ErrorReport::invalid_params(format!("missing '{}'", name)))
    }

    fn optional_text(&self, name: &str) -> Result<Option<&'a str>, ErrorReport> {
        match self.get(name) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(ErrorReport::invalid_params(format!("'{}' must be a string", name))),
        }
    }

    fn number(&self, name: &str) -> Result<f64, ErrorReport> {
        match self.get(name) {
            None | Some(JsonValue::Null) => Err(ErrorReport::invalid_params(format!("missing '{}'", name))),
            Some(v) => v
                .as_f64()
                .ok_or_else(|| ErrorReport::invalid_params(format!("'{}' must be a number", name))),
        }
    }
}
