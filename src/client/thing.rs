use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// One page of the `/things` endpoint.
#[derive(Debug, Deserialize)]
pub struct ThingsResponse {
    pub links: Links,
    pub data: Vec<RawThing>,
}

/// Pagination cursors as returned by the API. `next` is absent on the
/// last page.
#[derive(Debug, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub current: String,
    pub next: Option<String>,
}

/// A search result exactly as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct RawThing {
    pub id: String,
    pub attributes: Attributes,
    #[serde(default)]
    pub relationships: Value,
}

#[derive(Debug, Deserialize)]
pub struct Attributes {
    pub title: Option<String>,
    pub description: Option<String>,
    pub datasource: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub indexed_at: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub distance: Option<f64>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// A sensor channel preview attached to a raw search result.
#[derive(Debug, Deserialize)]
pub struct Channel {
    pub id: String,
    pub value: Option<Value>,
    pub unit: Option<String>,
    pub recorded_at: Option<String>,
}

/// Flattened representation of one search result with a per-channel
/// data mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datasource: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub indexed_at: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub distance: Option<f64>,
    pub data: HashMap<String, ChannelData>,
    /// Related-resource links, passed through unmodified.
    pub relationships: Value,
}

/// Latest reading for one channel of a [`Thing`].
///
/// Falsy wire values (null, `0`, `false`, the empty string) collapse to
/// `None` rather than being carried through as literals.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelData {
    pub value: Option<Value>,
    pub unit: Option<String>,
    pub recorded_at: Option<String>,
}

impl From<RawThing> for Thing {
    fn from(raw: RawThing) -> Self {
        let attributes = raw.attributes;

        let data = attributes
            .channels
            .into_iter()
            .map(|channel| {
                (
                    channel.id,
                    ChannelData {
                        value: present_value(channel.value),
                        unit: present_unit(channel.unit),
                        recorded_at: channel.recorded_at,
                    },
                )
            })
            .collect();

        Self {
            id: raw.id,
            title: attributes.title,
            description: attributes.description,
            datasource: attributes.datasource,
            created_at: attributes.created_at,
            updated_at: attributes.updated_at,
            indexed_at: attributes.indexed_at,
            longitude: attributes.longitude,
            latitude: attributes.latitude,
            distance: attributes.distance,
            data,
            relationships: raw.relationships,
        }
    }
}

fn present_value(value: Option<Value>) -> Option<Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn present_unit(unit: Option<String>) -> Option<String> {
    unit.filter(|u| !u.is_empty())
}
