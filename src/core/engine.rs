use crate::core::operators::ReactiveStreamExt;
use crate::core::{Person, PersonRepository, Result};
use futures::{future, StreamExt};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Lookup by id. With `required`, a miss is reported as an error instead of an empty result.
    ById { id: i32, required: bool },
    All { exclude_last_name: Option<String> },
}

impl Query {
    pub fn describe(&self) -> String {
        match self {
            Query::ById { id, .. } => format!("id = {}", id),
            Query::All {
                exclude_last_name: Some(name),
            } => format!("all, last_name != {}", name),
            Query::All {
                exclude_last_name: None,
            } => "all".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub persons: Vec<Person>,
}

impl QueryReport {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                if self.persons.is_empty() {
                    return Ok(format!("No person matches ({})", self.query));
                }
                let mut out = String::new();
                for person in &self.persons {
                    // Writing to a String cannot fail.
                    let _ = writeln!(out, "{}", person);
                }
                Ok(out.trim_end().to_string())
            }
        }
    }
}

pub struct QueryEngine<R: PersonRepository> {
    repository: R,
}

impl<R: PersonRepository> QueryEngine<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn run(&self, query: &Query) -> Result<QueryReport> {
        tracing::info!("Running query: {}", query.describe());

        let persons = match query {
            Query::ById { id, required: true } => vec![self.repository.require_by_id(*id).await?],
            Query::ById {
                id,
                required: false,
            } => self.repository.get_by_id(*id).await.into_iter().collect(),
            Query::All { exclude_last_name } => {
                self.repository
                    .find_all()
                    .filter(|p| {
                        future::ready(exclude_last_name.as_deref() != Some(p.last_name.as_str()))
                    })
                    .collect_list()
                    .await
            }
        };

        tracing::info!("Query matched {} person(s)", persons.len());

        Ok(QueryReport {
            query: query.describe(),
            persons,
        })
    }
}
