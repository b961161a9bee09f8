//! Metadata Collector - gathers endpoint metadata through a [`Prompter`].
//!
//! Input errors (bad names, non-numeric TTLs) are reported and re-asked
//! here, so the engine only ever sees well-formed metadata. Prompter
//! failures abort collection.

use tracing::{debug, instrument};

use crate::{
    application::ports::Prompter,
    domain::{
        CacheSettings, DEFAULT_VERSION, DomainValidator as validator, EndpointMetadata,
        HttpMethod, normalize_name,
    },
    error::{LapisError, LapisResult},
};

/// Defaults offered at each prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorDefaults {
    pub version: String,
    pub method: HttpMethod,
    pub cache_enabled: bool,
    pub cache_ttl_seconds: u32,
}

impl Default for CollectorDefaults {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            method: HttpMethod::default(),
            cache_enabled: false,
            cache_ttl_seconds: CacheSettings::DEFAULT_TTL_SECONDS,
        }
    }
}

/// Asks the endpoint questions in a fixed order.
pub struct MetadataCollector<'a> {
    prompter: &'a dyn Prompter,
    defaults: CollectorDefaults,
}

impl<'a> MetadataCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter, defaults: CollectorDefaults) -> Self {
        Self { prompter, defaults }
    }

    /// Run every prompt and build the metadata record.
    #[instrument(skip_all)]
    pub fn collect(&self) -> LapisResult<EndpointMetadata> {
        let name = self.ask_name()?;
        let version = self
            .prompter
            .ask_text("API version", Some(self.defaults.version.as_str()))?;
        let description = self.prompter.ask_text("API description", None)?;
        let tags = self
            .prompter
            .ask_text("Tags (comma-separated)", Some(""))?;
        let method = self.ask_method()?;
        let cache_enabled = self
            .prompter
            .ask_boolean("Enable caching?", self.defaults.cache_enabled)?;
        let ttl = self.ask_ttl()?;

        let metadata = EndpointMetadata::builder()
            .name(&name)
            .version(version)
            .description(description)
            .tags_csv(&tags)
            .method(method)
            .cache(cache_enabled, ttl)
            .build()?;

        debug!(endpoint = %metadata, tags = metadata.tags.len(), "Metadata collected");
        Ok(metadata)
    }

    fn ask_name(&self) -> LapisResult<String> {
        loop {
            let name = normalize_name(&self.prompter.ask_text("API name", None)?);
            match validator::validate_name(&name) {
                Ok(()) => return Ok(name),
                Err(e) => {
                    debug!(error = %e, "Rejected endpoint name");
                    self.prompter.report(&e.to_string())?;
                }
            }
        }
    }

    fn ask_method(&self) -> LapisResult<HttpMethod> {
        let choices: Vec<&str> = HttpMethod::ALL.iter().map(|m| m.as_str()).collect();
        let index =
            self.prompter
                .ask_choice("HTTP method", &choices, self.defaults.method.index())?;

        HttpMethod::ALL
            .get(index)
            .copied()
            .ok_or_else(|| LapisError::Internal {
                message: format!("prompter returned choice {index} of {}", choices.len()),
            })
    }

    fn ask_ttl(&self) -> LapisResult<u32> {
        let default = self.defaults.cache_ttl_seconds.to_string();
        loop {
            let raw = self
                .prompter
                .ask_text("Cache TTL in seconds", Some(default.as_str()))?;
            match CacheSettings::parse_ttl(&raw) {
                Ok(ttl) => return Ok(ttl),
                Err(e) => {
                    debug!(error = %e, "Rejected cache TTL");
                    self.prompter.report(&e.to_string())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Plays back canned answers; blank answers take the default.
    struct Answers {
        lines: Mutex<VecDeque<&'static str>>,
        reports: Mutex<Vec<String>>,
    }

    impl Answers {
        fn new(lines: &[&'static str]) -> Self {
            Self {
                lines: Mutex::new(lines.iter().copied().collect()),
                reports: Mutex::new(Vec::new()),
            }
        }

        fn next(&self) -> LapisResult<&'static str> {
            self.lines
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ApplicationError::InputClosed.into())
        }

        fn reports(&self) -> Vec<String> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl Prompter for Answers {
        fn ask_text(&self, _prompt: &str, default: Option<&str>) -> LapisResult<String> {
            let answer = self.next()?;
            Ok(match default {
                Some(d) if answer.is_empty() => d.to_string(),
                _ => answer.to_string(),
            })
        }

        fn ask_choice(&self, _prompt: &str, choices: &[&str], default: usize) -> LapisResult<usize> {
            let answer = self.next()?;
            if answer.is_empty() {
                return Ok(default);
            }
            Ok(choices.iter().position(|c| *c == answer).unwrap_or(default))
        }

        fn ask_boolean(&self, _prompt: &str, default: bool) -> LapisResult<bool> {
            Ok(match self.next()? {
                "y" => true,
                "n" => false,
                _ => default,
            })
        }

        fn report(&self, message: &str) -> LapisResult<()> {
            self.reports.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    fn collect(answers: &Answers) -> LapisResult<EndpointMetadata> {
        MetadataCollector::new(answers, CollectorDefaults::default()).collect()
    }

    #[test]
    fn collects_orders_scenario() {
        let answers = Answers::new(&[
            "Orders",
            "2.0.0",
            "Order lookup",
            "retail, internal",
            "POST",
            "y",
            "30",
        ]);
        let m = collect(&answers).unwrap();

        assert_eq!(m.name, "orders");
        assert_eq!(m.version, "2.0.0");
        assert_eq!(m.description, "Order lookup");
        assert_eq!(m.tags, ["retail", "internal"]);
        assert_eq!(m.method, HttpMethod::Post);
        assert_eq!(m.cache, CacheSettings::new(true, 30));
        assert!(answers.reports().is_empty());
    }

    #[test]
    fn blank_answers_take_defaults() {
        let answers = Answers::new(&["weather", "", "", "", "", "", ""]);
        let m = collect(&answers).unwrap();

        assert_eq!(m.version, "1.0.0");
        assert_eq!(m.description, "");
        assert!(m.tags.is_empty());
        assert_eq!(m.method, HttpMethod::Get);
        assert_eq!(m.cache, CacheSettings::new(false, 60));
    }

    #[test]
    fn configured_defaults_are_offered() {
        let answers = Answers::new(&["weather", "", "", "", "", "", ""]);
        let defaults = CollectorDefaults {
            version: "0.1.0".into(),
            method: HttpMethod::Put,
            cache_enabled: true,
            cache_ttl_seconds: 300,
        };
        let m = MetadataCollector::new(&answers, defaults).collect().unwrap();

        assert_eq!(m.version, "0.1.0");
        assert_eq!(m.method, HttpMethod::Put);
        assert_eq!(m.cache, CacheSettings::new(true, 300));
    }

    #[test]
    fn invalid_name_is_asked_again() {
        let answers = Answers::new(&["", "user-profile", "user_profile", "", "", "", "", "", ""]);
        let m = collect(&answers).unwrap();

        assert_eq!(m.name, "user_profile");
        let reports = answers.reports();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].contains("cannot be empty"));
        assert!(reports[1].contains("'-'"));
    }

    #[test]
    fn invalid_ttl_is_asked_again() {
        let answers = Answers::new(&["weather", "", "", "", "", "y", "soon", "-1", "90"]);
        let m = collect(&answers).unwrap();

        assert_eq!(m.cache, CacheSettings::new(true, 90));
        assert_eq!(answers.reports().len(), 2);
    }

    #[test]
    fn closed_input_aborts() {
        let answers = Answers::new(&["weather", "1.0.0"]);
        let err = collect(&answers).unwrap_err();
        assert!(matches!(
            err,
            LapisError::Application(ApplicationError::InputClosed)
        ));
    }
}
