//! Firestore
//!
//! Saved workouts are stored as documents of the `workouts` collection and accessed through the
//! Cloud Firestore REST API. Documents are ordered by `date` and then by document name, both
//! descending, which gives each workout a stable position for cursor pagination.

use std::collections::BTreeMap;

use anyhow::{Context, anyhow, bail};
use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use treine_domain as domain;
use uuid::Uuid;

const BASE_URL: &str = "https://firestore.googleapis.com/v1";
const COLLECTION: &str = "workouts";
const DEFAULT_DATABASE: &str = "(default)";

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_id: String,
    pub api_key: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

impl Config {
    /// Reads the connection settings that were provided at build time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("TREINE_FIRESTORE_PROJECT_ID"),
            option_env!("TREINE_FIRESTORE_API_KEY"),
        )
    }

    fn from_values(project_id: Option<&str>, api_key: Option<&str>) -> Result<Self, ConfigError> {
        let project_id = project_id
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("TREINE_FIRESTORE_PROJECT_ID"))?;
        let api_key = api_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("TREINE_FIRESTORE_API_KEY"))?;
        Ok(Self {
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
            database: default_database(),
        })
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/{}", self.project_id, self.database)
    }

    fn document_name(&self, id: &domain::WorkoutID) -> String {
        format!("{}/documents/{COLLECTION}/{id}", self.database_path())
    }

    fn documents_url(&self) -> String {
        format!("{BASE_URL}/{}/documents", self.database_path())
    }
}

#[derive(Clone)]
pub struct Firestore<S: SendRequest> {
    config: Config,
    sender: S,
}

impl Firestore<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_sender(config, GlooNetSendRequest)
    }
}

impl<S: SendRequest> Firestore<S> {
    pub fn with_sender(config: Config, sender: S) -> Self {
        Self { config, sender }
    }

    async fn send(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, domain::StorageError> {
        let request = request.map_err(other)?;
        self.sender
            .send_request(request)
            .await
            .map_err(|_| domain::StorageError::NoConnection)
    }

    fn structured_query(&self, after: Option<&domain::Cursor>, limit: usize) -> serde_json::Value {
        let mut query = json!({
            "from": [{ "collectionId": COLLECTION }],
            "orderBy": [
                { "field": { "fieldPath": "date" }, "direction": "DESCENDING" },
                { "field": { "fieldPath": "__name__" }, "direction": "DESCENDING" },
            ],
            "limit": limit,
        });
        if let Some(cursor) = after {
            query["startAt"] = json!({
                "values": [
                    Value::TimestampValue(timestamp(cursor.date)),
                    Value::ReferenceValue(self.config.document_name(&cursor.id)),
                ],
                "before": false,
            });
        }
        json!({ "structuredQuery": query })
    }
}

impl<S: SendRequest> domain::WorkoutRepository for Firestore<S> {
    async fn read_workouts(
        &self,
        after: Option<domain::Cursor>,
        limit: usize,
    ) -> Result<Vec<domain::SavedWorkout>, domain::ReadError> {
        let response = self
            .send(
                Request::post(&format!("{}:runQuery", self.config.documents_url()))
                    .query([("key", &self.config.api_key)])
                    .json(&self.structured_query(after.as_ref(), limit)),
            )
            .await?;
        check_status(&response)?;
        let results = response
            .json::<Vec<QueryResult>>()
            .await
            .map_err(other)?;
        Ok(decode_query_results(results).map_err(other)?)
    }

    async fn create_workout(
        &self,
        workout: domain::NewWorkout,
    ) -> Result<domain::SavedWorkout, domain::CreateError> {
        let response = self
            .send(
                Request::post(&format!("{}/{COLLECTION}", self.config.documents_url()))
                    .query([("key", &self.config.api_key)])
                    .json(&Document::from_workout(&workout, Utc::now())),
            )
            .await?;
        check_status(&response)?;
        let document = response.json::<Document>().await.map_err(other)?;
        Ok(domain::SavedWorkout::try_from(document).map_err(other)?)
    }

    async fn update_workout_notes(
        &self,
        id: domain::WorkoutID,
        notes: String,
    ) -> Result<domain::WorkoutID, domain::UpdateError> {
        let response = self
            .send(
                Request::patch(&format!("{}/{COLLECTION}/{id}", self.config.documents_url()))
                    .query([
                        ("key", self.config.api_key.as_str()),
                        ("updateMask.fieldPaths", "workoutNotes"),
                        ("currentDocument.exists", "true"),
                    ])
                    .json(&Document {
                        name: String::new(),
                        fields: BTreeMap::from([(
                            "workoutNotes".to_string(),
                            Value::StringValue(notes),
                        )]),
                    }),
            )
            .await?;
        if response.status() == 404 {
            return Err(domain::UpdateError::NotFound);
        }
        check_status(&response)?;
        Ok(id)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let response = self
            .send(
                Request::delete(&format!("{}/{COLLECTION}/{id}", self.config.documents_url()))
                    .query([
                        ("key", self.config.api_key.as_str()),
                        ("currentDocument.exists", "true"),
                    ])
                    .build(),
            )
            .await?;
        if response.status() == 404 {
            return Err(domain::DeleteError::NotFound);
        }
        check_status(&response)?;
        Ok(id)
    }
}

fn other(err: impl Into<Box<dyn std::error::Error>>) -> domain::StorageError {
    domain::StorageError::Other(err.into())
}

fn check_status(response: &Response) -> Result<(), domain::StorageError> {
    if response.ok() {
        Ok(())
    } else {
        Err(other(format!(
            "{} {}",
            response.status(),
            response.status_text()
        )))
    }
}

fn timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Element of a `runQuery` response. Elements without a document only report progress.
#[derive(Deserialize, Debug)]
struct QueryResult {
    document: Option<Document>,
}

fn decode_query_results(results: Vec<QueryResult>) -> anyhow::Result<Vec<domain::SavedWorkout>> {
    results
        .into_iter()
        .filter_map(|result| result.document)
        .map(domain::SavedWorkout::try_from)
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Document {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// 64-bit integers are transferred as strings.
    IntegerValue(String),
    DoubleValue(f64),
    TimestampValue(String),
    StringValue(String),
    ReferenceValue(String),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct ArrayValue {
    #[serde(default)]
    values: Vec<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct MapValue {
    #[serde(default)]
    fields: BTreeMap<String, Value>,
}

impl Value {
    fn array(values: Vec<Value>) -> Self {
        Value::ArrayValue(ArrayValue { values })
    }

    fn map<const N: usize>(fields: [(&str, Value); N]) -> Self {
        Value::MapValue(MapValue {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        })
    }

    fn as_str(&self) -> anyhow::Result<&str> {
        match self {
            Value::StringValue(value) => Ok(value),
            value => bail!("expected string, found {value:?}"),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(&self) -> anyhow::Result<f64> {
        match self {
            Value::DoubleValue(value) => Ok(*value),
            Value::IntegerValue(value) => Ok(value.parse::<i64>()? as f64),
            value => bail!("expected number, found {value:?}"),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn as_u32(&self) -> anyhow::Result<u32> {
        match self {
            Value::IntegerValue(value) => Ok(value.parse()?),
            Value::DoubleValue(value) if value.fract() == 0.0 && *value >= 0.0 => {
                Ok(u32::try_from(*value as u64)?)
            }
            value => bail!("expected unsigned integer, found {value:?}"),
        }
    }

    fn as_timestamp(&self) -> anyhow::Result<DateTime<Utc>> {
        match self {
            Value::TimestampValue(value) => Ok(DateTime::parse_from_rfc3339(value)?.to_utc()),
            value => bail!("expected timestamp, found {value:?}"),
        }
    }

    fn as_array(&self) -> anyhow::Result<&[Value]> {
        match self {
            Value::ArrayValue(array) => Ok(&array.values),
            value => bail!("expected array, found {value:?}"),
        }
    }

    fn as_map(&self) -> anyhow::Result<&BTreeMap<String, Value>> {
        match self {
            Value::MapValue(map) => Ok(&map.fields),
            value => bail!("expected map, found {value:?}"),
        }
    }
}

fn field<'a>(fields: &'a BTreeMap<String, Value>, name: &str) -> anyhow::Result<&'a Value> {
    fields
        .get(name)
        .with_context(|| format!("missing field {name}"))
}

/// Absent and null fields are treated like empty ones.
fn optional_field<'a>(fields: &'a BTreeMap<String, Value>, name: &str) -> Option<&'a Value> {
    fields
        .get(name)
        .filter(|value| !matches!(value, Value::NullValue(())))
}

impl Document {
    fn from_workout(workout: &domain::NewWorkout, date: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            fields: BTreeMap::from([
                (
                    "type".to_string(),
                    Value::StringValue(workout.workout_type.to_string()),
                ),
                (
                    "exercises".to_string(),
                    Value::array(workout.exercises.iter().map(encode_exercise).collect()),
                ),
                (
                    "workoutNotes".to_string(),
                    Value::StringValue(workout.notes.clone()),
                ),
                ("date".to_string(), Value::TimestampValue(timestamp(date))),
            ]),
        }
    }

    fn id(&self) -> anyhow::Result<domain::WorkoutID> {
        match self.name.rsplit_once('/') {
            Some((_, id)) if !id.is_empty() => Ok(id.into()),
            _ => Err(anyhow!("invalid document name: {:?}", self.name)),
        }
    }
}

fn encode_exercise(exercise: &domain::ExerciseLogEntry) -> Value {
    Value::map([
        (
            "exerciseId",
            Value::StringValue(exercise.exercise_id.to_string()),
        ),
        (
            "exerciseName",
            Value::StringValue(exercise.exercise_name.clone()),
        ),
        (
            "sets",
            Value::array(exercise.sets.iter().map(encode_set).collect()),
        ),
    ])
}

fn encode_set(set: &domain::SetData) -> Value {
    let mut fields = vec![
        ("id", Value::StringValue(set.id.to_string())),
        (
            "reps",
            Value::IntegerValue(u32::from(set.reps).to_string()),
        ),
    ];
    if let Some(weight) = set.weight {
        fields.push(("weight", Value::DoubleValue(f64::from(weight))));
    }
    Value::MapValue(MapValue {
        fields: fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    })
}

impl TryFrom<Document> for domain::SavedWorkout {
    type Error = anyhow::Error;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let id = document.id()?;
        let fields = &document.fields;
        let workout_type = domain::WorkoutType::try_from(field(fields, "type")?.as_str()?)?;
        let exercises = match optional_field(fields, "exercises") {
            Some(value) => value
                .as_array()?
                .iter()
                .map(decode_exercise)
                .collect::<anyhow::Result<Vec<_>>>()?,
            None => vec![],
        };
        let notes = match optional_field(fields, "workoutNotes") {
            Some(value) => value.as_str()?.to_string(),
            None => String::new(),
        };
        Ok(Self {
            date: field(fields, "date")?
                .as_timestamp()
                .with_context(|| format!("invalid date of workout {id}"))?,
            id,
            workout_type,
            exercises,
            notes,
        })
    }
}

fn decode_exercise(value: &Value) -> anyhow::Result<domain::ExerciseLogEntry> {
    let fields = value.as_map()?;
    Ok(domain::ExerciseLogEntry {
        exercise_id: field(fields, "exerciseId")?.as_str()?.into(),
        exercise_name: field(fields, "exerciseName")?.as_str()?.to_string(),
        sets: match optional_field(fields, "sets") {
            Some(value) => value
                .as_array()?
                .iter()
                .map(decode_set)
                .collect::<anyhow::Result<Vec<_>>>()?,
            None => vec![],
        },
    })
}

#[allow(clippy::cast_possible_truncation)]
fn decode_set(value: &Value) -> anyhow::Result<domain::SetData> {
    let fields = value.as_map()?;
    Ok(domain::SetData {
        id: Uuid::parse_str(field(fields, "id")?.as_str()?)?.into(),
        reps: domain::Reps::new(field(fields, "reps")?.as_u32()?)?,
        weight: optional_field(fields, "weight")
            .map(Value::as_f64)
            .transpose()?
            .map(|weight| weight as f32),
    })
}
