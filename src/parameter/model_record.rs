use super::identifier::Identifier;
use super::{IdentifierOption, ParameterError};
use indexmap::{IndexMap, IndexSet};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A collection of parameters of a pure substance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PureRecord<M> {
    pub identifier: Identifier,
    /// molar weight in g/mol
    #[serde(default)]
    pub molarweight: f64,
    pub model_record: M,
}

impl<M> PureRecord<M> {
    /// Create a new `PureRecord`.
    pub fn new(identifier: Identifier, molarweight: f64, model_record: M) -> Self {
        Self {
            identifier,
            molarweight,
            model_record,
        }
    }

    /// Select pure substance parameters from a json string.
    ///
    /// The records are returned in the order of `substances`.
    pub fn from_json_str(
        substances: &[&str],
        json: &str,
        identifier_option: IdentifierOption,
    ) -> Result<Vec<Self>, ParameterError>
    where
        M: DeserializeOwned,
    {
        // create list of substances
        let mut queried: IndexSet<&str> = substances.iter().copied().collect();
        // raise error on duplicate detection
        if queried.len() != substances.len() {
            return Err(ParameterError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        let json_records: Vec<Self> = serde_json::from_str(json)?;
        let mut records: IndexMap<&str, Self> = IndexMap::with_capacity(substances.len());

        // build map, draining list of queried substances in the process
        for record in json_records {
            let id = record
                .identifier
                .as_str(identifier_option)
                .and_then(|id| queried.shift_take(id));
            if let Some(id) = id {
                records.insert(id, record);
            }
            // all parameters parsed
            if queried.is_empty() {
                break;
            }
        }

        // report missing parameters
        if !queried.is_empty() {
            return Err(ParameterError::ComponentsNotFound(
                queried.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", "),
            ));
        };

        // collect into vec in correct order
        Ok(substances
            .iter()
            .filter_map(|s| records.shift_remove(s))
            .collect())
    }
}

impl<M> std::fmt::Display for PureRecord<M>
where
    M: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PureRecord(")?;
        write!(f, "\n\tidentifier={},", self.identifier)?;
        write!(f, "\n\tmolarweight={},", self.molarweight)?;
        write!(f, "\n\tmodel_record={},", self.model_record)?;
        write!(f, "\n)")
    }
}
