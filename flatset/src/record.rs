//! Enregistrements et valeurs scalaires

use std::borrow::Cow;
use std::fmt;

/// Nombre de décimales par défaut pour les flottants (suffisant pour des coordonnées)
pub const DEFAULT_FLOAT_PRECISION: usize = 5;

/// Valeur scalaire d'un champ
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Texte libre, exporté tel quel
    Text(String),
    /// Flottant, exporté en notation décimale à précision fixe
    Float(f64),
}

impl Value {
    /// Rend la valeur en texte, les flottants avec `precision` décimales
    pub fn render(&self, precision: usize) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s.as_str()),
            Value::Float(f) => Cow::Owned(format_float(*f, precision)),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Float(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_FLOAT_PRECISION))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// Formate un flottant sans notation scientifique.
///
/// `format!("{:.N}")` ne produit jamais d'exposant; on normalise seulement
/// le zéro négatif ("-0.00000" → "0.00000").
fn format_float(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Un enregistrement: association ordonnée nom de champ → valeur
///
/// L'ordre d'insertion est l'ordre des colonnes à l'export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute (ou remplace) un champ, style builder
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Ajoute un champ en fin d'enregistrement, ou remplace sa valeur en place s'il existe
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Noms des champs, dans l'ordre
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Valeurs, dans l'ordre des champs
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Vrai si les champs correspondent exactement (même ensemble, même ordre)
    pub(crate) fn matches_schema(&self, schema: &[String]) -> bool {
        self.fields.len() == schema.len()
            && self
                .fields
                .iter()
                .zip(schema)
                .all(|((name, _), expected)| name == expected)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}
