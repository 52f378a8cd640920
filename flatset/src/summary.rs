//! Résumé d'un dataset: total et valeurs distinctes d'un champ de regroupement

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::record::DEFAULT_FLOAT_PRECISION;

/// Résumé calculé par [`summarize`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Champ de regroupement
    pub group_field: String,
    /// Nombre total d'enregistrements
    pub total: usize,
    /// Valeurs distinctes du champ, triées
    pub values: Vec<String>,
}

impl Summary {
    /// Nombre de valeurs distinctes
    pub fn distinct(&self) -> usize {
        self.values.len()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total records: {}", self.total)?;
        writeln!(
            f,
            "Distinct values of '{}': {}",
            self.group_field,
            self.distinct()
        )?;
        write!(f, "Values: [{}]", self.values.join(", "))
    }
}

/// Calcule le total et les valeurs distinctes (triées) de `group_field`.
///
/// Les flottants sont comparés sous leur forme rendue (5 décimales).
pub fn summarize(dataset: &Dataset, group_field: &str) -> Result<Summary, DatasetError> {
    let values: BTreeSet<String> = dataset
        .column(group_field)?
        .into_iter()
        .map(|v| v.render(DEFAULT_FLOAT_PRECISION).into_owned())
        .collect();

    Ok(Summary {
        group_field: group_field.to_string(),
        total: dataset.len(),
        values: values.into_iter().collect(),
    })
}
