//! Raw class map as produced by the model loader.
//!
//! Every key except `name` and `label` may be absent. Absence, not `null`,
//! signals that a key does not apply to that class or attribute.

mod parse;

use serde::Deserialize;

/// The loader's output: classes in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModel {
    #[serde(default)]
    pub classes: Vec<RawClass>,
}

/// One class as the loader describes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClass {
    pub name: String,
    pub super_class: Option<String>,
    pub stereotype: Option<String>,
    pub namespace: Option<String>,
    #[serde(default)]
    pub origin: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
    #[serde(default)]
    pub instances: Vec<RawInstance>,
    pub comment: Option<String>,
}

/// One attribute or association end as the loader describes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttribute {
    pub label: String,
    pub domain: Option<String>,
    pub data_type: Option<String>,
    pub range: Option<String>,
    pub multiplicity: Option<String>,
    pub inverse_role: Option<String>,
    pub inverse_multiplicity: Option<String>,
    pub is_fixed: Option<String>,
    pub namespace: Option<String>,
    #[serde(default)]
    pub origin: Vec<String>,
    pub comment: Option<String>,
}

/// An enumeration literal.
///
/// Some loaders hand literals over as structured objects, others as
/// embedded JSON text that may still carry `&quot;` entities. The text
/// form is decoded during lowering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawInstance {
    Structured {
        label: String,
        #[serde(rename = "type", default)]
        type_name: Option<String>,
        #[serde(default)]
        comment: Option<String>,
    },
    Embedded(String),
}

impl RawModel {
    /// Look up a class by name (first declaration wins).
    pub fn class(&self, name: &str) -> Option<&RawClass> {
        self.classes.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys() {
        let model: RawModel = serde_json::from_str(
            r##"{
                "classes": [
                    {
                        "name": "Bay",
                        "superClass": "#EquipmentContainer",
                        "attributes": [
                            {
                                "label": "Substation",
                                "range": "#Substation",
                                "multiplicity": "M:0..1",
                                "inverseRole": "Substation.Bays",
                                "inverseMultiplicity": "M:0..n"
                            }
                        ]
                    }
                ]
            }"##,
        )
        .unwrap();

        let bay = model.class("Bay").unwrap();
        assert_eq!(bay.super_class.as_deref(), Some("#EquipmentContainer"));
        assert!(bay.stereotype.is_none());
        assert!(bay.origin.is_empty());

        let attr = &bay.attributes[0];
        assert!(attr.data_type.is_none());
        assert_eq!(attr.inverse_multiplicity.as_deref(), Some("M:0..n"));
    }

    #[test]
    fn test_instance_forms() {
        let instances: Vec<RawInstance> = serde_json::from_str(
            r#"[
                {"label": "open", "type": "SwitchState", "comment": "Switch is open"},
                "{&quot;label&quot;: &quot;closed&quot;}"
            ]"#,
        )
        .unwrap();

        assert_eq!(
            instances[0],
            RawInstance::Structured {
                label: "open".into(),
                type_name: Some("SwitchState".into()),
                comment: Some("Switch is open".into()),
            }
        );
        assert!(matches!(instances[1], RawInstance::Embedded(_)));
    }
}
