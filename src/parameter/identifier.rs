use serde::{Deserialize, Serialize};

/// Possible variants to identify a substance.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierOption {
    Cas,
    Name,
    IupacName,
    Smiles,
    Inchi,
    Formula,
}

/// A collection of identifiers for a chemical structure or substance.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Identifier {
    /// CAS number
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cas: Option<String>,
    /// Commonly used english name
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// IUPAC name
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iupac_name: Option<String>,
    /// SMILES key
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    /// InchI key
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inchi: Option<String>,
    /// Chemical formula
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Identifier {
    /// Create a new identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// # use feos_cubic::parameter::Identifier;
    /// let ethane = Identifier::new(
    ///     Some("74-84-0"),
    ///     Some("ethane"),
    ///     Some("ethane"),
    ///     Some("CC"),
    ///     Some("InChI=1S/C2H6/c1-2/h1-2H3"),
    ///     Some("C2H6")
    /// );
    /// assert_eq!(ethane.name.as_deref(), Some("ethane"));
    /// ```
    pub fn new(
        cas: Option<&str>,
        name: Option<&str>,
        iupac_name: Option<&str>,
        smiles: Option<&str>,
        inchi: Option<&str>,
        formula: Option<&str>,
    ) -> Identifier {
        Identifier {
            cas: cas.map(Into::into),
            name: name.map(Into::into),
            iupac_name: iupac_name.map(Into::into),
            smiles: smiles.map(Into::into),
            inchi: inchi.map(Into::into),
            formula: formula.map(Into::into),
        }
    }

    pub fn as_str(&self, option: IdentifierOption) -> Option<&str> {
        match option {
            IdentifierOption::Cas => self.cas.as_deref(),
            IdentifierOption::Name => self.name.as_deref(),
            IdentifierOption::IupacName => self.iupac_name.as_deref(),
            IdentifierOption::Smiles => self.smiles.as_deref(),
            IdentifierOption::Inchi => self.inchi.as_deref(),
            IdentifierOption::Formula => self.formula.as_deref(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = [
            ("cas", &self.cas),
            ("name", &self.name),
            ("iupac_name", &self.iupac_name),
            ("smiles", &self.smiles),
            ("inchi", &self.inchi),
            ("formula", &self.formula),
        ]
        .into_iter()
        .filter_map(|(key, id)| id.as_ref().map(|id| format!("{key}={id}")))
        .collect::<Vec<_>>();
        write!(f, "Identifier({})", ids.join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fmt() {
        let id = Identifier::new(None, Some("ethane"), None, Some("CC"), None, None);
        assert_eq!(id.to_string(), "Identifier(name=ethane, smiles=CC)");
    }

    #[test]
    fn test_as_str() {
        let id = Identifier::new(Some("74-98-6"), Some("propane"), None, None, None, None);
        assert_eq!(id.as_str(IdentifierOption::Cas), Some("74-98-6"));
        assert_eq!(id.as_str(IdentifierOption::Name), Some("propane"));
        assert_eq!(id.as_str(IdentifierOption::Smiles), None);
    }
}
