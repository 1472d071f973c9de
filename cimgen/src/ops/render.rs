//! Render operation - per-attribute strings for one target.

use cimgen_codegen::{
    Backend,
    pipeline::{Pipeline, TracingPlugin},
};
use cimgen_model::RawModel;
use eyre::{Context, Result, bail};

use crate::{reports::RenderReport, target::TargetSupport};

/// Execute the render operation.
///
/// With `class`, only that class is returned and join tables are left out.
pub fn render(raw: RawModel, support: &TargetSupport, class: Option<&str>) -> Result<RenderReport> {
    let mut ctx = Pipeline::new()
        .plugin(TracingPlugin::new())
        .run(raw, support.config())
        .wrap_err("Planning failed")?;
    let plan = ctx.take_plan()?;
    let model = ctx.take_model()?;

    let rendered = support.backend().render(&plan, &model);

    let Some(name) = class else {
        return Ok(RenderReport {
            target: support.target.to_string(),
            classes: rendered.classes,
            join_tables: rendered.join_tables,
        });
    };

    let Some(selected) = rendered.classes.into_iter().find(|c| c.name == name) else {
        match plan.class(name) {
            Some(skipped) => bail!(
                "class '{}' is not emitted for {}: {}",
                name,
                support.target,
                skipped.emit
            ),
            None => bail!("class '{}' not found in the class map", name),
        }
    };

    Ok(RenderReport {
        target: support.target.to_string(),
        classes: vec![selected],
        join_tables: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ops::fixtures,
        reports::{BufferOutput, Report},
    };

    #[test]
    fn test_render_single_class() {
        let report = render(fixtures::raw(), &fixtures::support("go"), Some("Terminal"))
            .expect("render");

        let mut out = BufferOutput::default();
        report.render(&mut out);
        insta::assert_snapshot!(out.text().trim_end(), @r#"
        -- Terminal (schema) --
        IdentifiedObject
        ConnectivityNodesIds []resource `xml:"http://iec.ch/TC57/CIM100# Terminal.ConnectivityNodes"`
        "#);
    }

    #[test]
    fn test_render_skipped_class() {
        let err = render(
            fixtures::raw(),
            &fixtures::support("sqlalchemy"),
            Some("Measurement"),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "class 'Measurement' is not emitted for sqlalchemy: skip (unit value)"
        );
    }

    #[test]
    fn test_render_join_tables() {
        let report = render(fixtures::raw(), &fixtures::support("sqlalchemy"), None)
            .expect("render");

        assert_eq!(report.classes.len(), 3);
        assert_eq!(report.join_tables.len(), 1);
        assert!(report.join_tables[0].starts_with("terminal_to_connectivity_node = Table("));
    }
}
