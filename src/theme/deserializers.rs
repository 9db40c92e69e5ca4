use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::schema::TokenMap;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.len() == 0 {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_themes<'de, D>(deserializer: D) -> Result<IndexMap<String, TokenMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = IndexMap::deserialize(deserializer)?;

    if value.len() == 0 {
        return Err(D::Error::custom("at least one theme needs to be provided."));
    }

    Ok(value)
}

pub fn de_max_width<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<f32>() {
                Ok(width) => Ok(width),
                Err(_) => Err(D::Error::custom("could not convert string into a width")),
            }
        }

        StringOrFloat::Float(width) => Ok(width),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
