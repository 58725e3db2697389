#[cfg(test)]
mod fixtures {
    use crate::core::state::{
        AnchorData, ComponentData, ContourData, FontData, GlyphData, LayerData, LayerRole,
        PointData,
    };

    pub fn square(id: &str, role: LayerRole, size: f64) -> LayerData {
        let mut layer = LayerData::new(id, role);
        layer.advance_width = size + 50.0;
        layer.contours.push(ContourData::new(vec![
            PointData::line(0.0, 0.0),
            PointData::line(size, 0.0),
            PointData::line(size, size),
            PointData::line(0.0, size),
        ]));
        layer
    }

    pub fn triangle(id: &str) -> LayerData {
        let mut layer = LayerData::new(id, LayerRole::Master);
        layer.contours.push(ContourData::new(vec![
            PointData::line(0.0, 0.0),
            PointData::line(100.0, 0.0),
            PointData::line(50.0, 100.0),
        ]));
        layer
    }

    /// Light and bold squares plus a bold triangle that matches neither
    pub fn square_font() -> FontData {
        let mut glyph = GlyphData::new("a");
        glyph.unicode_values = vec!['a'];
        glyph.layers = vec![
            square("light", LayerRole::Master, 100.0),
            square("bold", LayerRole::Master, 140.0),
            triangle("bold.alt"),
        ];
        let mut font = FontData::default();
        font.insert_glyph(glyph);
        font
    }

    pub fn with_anchor(mut layer: LayerData, name: &str, x: f64, y: f64) -> LayerData {
        layer.anchors.push(AnchorData::new(name, x, y));
        layer
    }

    pub fn with_component(mut layer: LayerData, base: &str, dx: f64) -> LayerData {
        layer.components.push(ComponentData::new(base).offset(dx, 0.0));
        layer
    }

    pub fn layer<'a>(font: &'a FontData, glyph: &str, id: &str) -> &'a LayerData {
        font.glyph(glyph)
            .and_then(|g| g.layer(id))
            .expect("fixture layer")
    }
}

#[cfg(test)]
mod removal_tests {
    use super::fixtures::*;
    use crate::core::errors::LayerFault;
    use crate::core::state::{
        ContourData, FontData, GlyphData, HintData, LayerRole, NodeRef, PointData, Selection,
    };
    use crate::editing::sync_removal::{LayerSignature, Rejection, EDIT_LABEL};
    use crate::editing::{remove_in_compatible_layers, EditHistory, RemovalOutcome, RemovalRequest};

    fn remove(font: &mut FontData, history: &mut EditHistory, request: RemovalRequest) -> RemovalOutcome {
        remove_in_compatible_layers(font, history, &request)
    }

    #[test]
    fn test_node_removed_from_every_compatible_layer() {
        let mut font = square_font();
        let before = font.clone();
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_node(0, 2)),
        );

        let report = outcome.report().expect("completed");
        assert!(report.undoable);
        assert_eq!(report.layers.len(), 2);
        assert!(report.layers.iter().all(|l| l.nodes_removed == 1 && l.paths_removed == 0));

        for id in ["light", "bold"] {
            let contour = &layer(&font, "a", id).contours[0];
            assert_eq!(contour.points.len(), 3);
            assert!(contour.closed);
        }
        assert_eq!(layer(&font, "a", "bold").contours[0].points[2].y, 140.0);
        assert_eq!(
            layer(&font, "a", "bold.alt"),
            layer(&before, "a", "bold.alt"),
            "incompatible layer must not change"
        );

        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.last_group().map(|g| g.label.as_str()), Some(EDIT_LABEL));

        assert_eq!(history.undo(&mut font).unwrap().as_deref(), Some(EDIT_LABEL));
        assert_eq!(font, before);
    }

    #[test]
    fn test_redo_reapplies_whole_edit() {
        let mut font = square_font();
        let mut history = EditHistory::new();
        remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "bold", Selection::new().with_node(0, 0)),
        );
        let after = font.clone();

        history.undo(&mut font).unwrap();
        assert!(history.can_redo());
        history.redo(&mut font).unwrap();
        assert_eq!(font, after);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_compatible_layers_stay_compatible() {
        let mut font = square_font();
        let mut history = EditHistory::new();
        remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_node(0, 0).with_node(0, 3)),
        );

        let light = LayerSignature::of(layer(&font, "a", "light"));
        let bold = LayerSignature::of(layer(&font, "a", "bold"));
        assert_eq!(light, bold);
        assert_eq!(light.node_count(), 2);
    }

    #[test]
    fn test_emptied_paths_removed_in_every_layer() {
        let mut font = square_font();
        for id in ["light", "bold"] {
            let layer = font.glyph_mut("a").unwrap().layer_mut(id).unwrap();
            layer
                .contours
                .push(ContourData::new(vec![PointData::line(10.0, 10.0)]));
        }
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_node(1, 0)),
        );

        let report = outcome.report().expect("completed");
        assert!(report
            .layers
            .iter()
            .all(|l| l.nodes_removed == 1 && l.paths_removed == 1));
        for id in ["light", "bold"] {
            assert_eq!(layer(&font, "a", id).contours.len(), 1);
        }
    }

    #[test]
    fn test_whole_path_selection_removes_path() {
        let mut font = square_font();
        let mut history = EditHistory::new();
        let selection = (0..4).fold(Selection::new(), |s, n| s.with_node(0, n));

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", selection),
        );

        assert_eq!(
            outcome.summary(),
            "'a': removed 8 nodes, 2 paths across 2 layers"
        );
        assert!(layer(&font, "a", "light").contours.is_empty());
        assert!(layer(&font, "a", "bold").contours.is_empty());
        assert_eq!(layer(&font, "a", "bold.alt").contours.len(), 1);
    }

    #[test]
    fn test_keep_shape_removal_is_identical_across_layers() {
        let lens = |id: &str, width: f64| {
            let mut layer = crate::core::state::LayerData::new(id, LayerRole::Master);
            layer.contours.push(ContourData::new(vec![
                PointData::curve(0.0, 0.0),
                PointData::off(0.0, 50.0),
                PointData::off(width, 50.0),
                PointData::curve(width, 0.0),
                PointData::off(width, -50.0),
                PointData::off(0.0, -50.0),
            ]));
            layer
        };
        let mut glyph = GlyphData::new("o");
        glyph.layers = vec![lens("light", 100.0), lens("bold", 200.0)];
        let mut font = FontData::default();
        font.insert_glyph(glyph);
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("o", "light", Selection::new().with_node(0, 3)),
        );

        let report = outcome.report().expect("completed");
        assert!(report.layers.iter().all(|l| l.nodes_removed == 3));
        assert_eq!(
            LayerSignature::of(layer(&font, "o", "light")),
            LayerSignature::of(layer(&font, "o", "bold"))
        );
        assert_eq!(layer(&font, "o", "bold").contours[0].points.len(), 3);
    }

    #[test]
    fn test_anchor_removed_by_name() {
        let mut font = square_font();
        {
            let glyph = font.glyph_mut("a").unwrap();
            let light = glyph.layers[0].clone();
            glyph.layers[0] = with_anchor(with_anchor(light, "bottom", 50.0, 0.0), "top", 50.0, 100.0);
            let bold = glyph.layers[1].clone();
            glyph.layers[1] = with_anchor(bold, "top", 70.0, 140.0);
        }
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_anchor("top")),
        );

        assert!(outcome.report().is_some());
        assert!(layer(&font, "a", "light").anchor("top").is_none());
        assert!(layer(&font, "a", "light").anchor("bottom").is_some());
        assert!(layer(&font, "a", "bold").anchors.is_empty());
    }

    #[test]
    fn test_corner_hint_matched_by_value_not_position() {
        let mut font = square_font();
        let corner = NodeRef::new(0, 1);
        {
            let glyph = font.glyph_mut("a").unwrap();
            glyph.layers[0].hints = vec![
                HintData::stem(NodeRef::new(0, 0), NodeRef::new(0, 1)),
                HintData::corner("_corner.round", corner),
            ];
            glyph.layers[1].hints = vec![HintData::corner("_corner.sharp", corner)];
        }
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_hint(1)),
        );

        let report = outcome.report().expect("completed");
        assert!(report.layers.iter().all(|l| l.hints_removed == 1));
        assert_eq!(layer(&font, "a", "light").hints.len(), 1);
        assert!(layer(&font, "a", "bold").hints.is_empty());
    }

    #[test]
    fn test_stem_hint_selection_is_nothing() {
        let mut font = square_font();
        font.glyph_mut("a").unwrap().layers[0].hints =
            vec![HintData::stem(NodeRef::new(0, 0), NodeRef::new(0, 1))];
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_hint(0)),
        );

        assert_eq!(outcome, RemovalOutcome::NothingSelected);
        assert_eq!(layer(&font, "a", "light").hints.len(), 1);
    }

    #[test]
    fn test_empty_or_stale_selection_records_nothing() {
        let mut font = square_font();
        let before = font.clone();
        let mut history = EditHistory::new();

        for selection in [Selection::new(), Selection::new().with_node(4, 0).with_anchor("nope")] {
            let outcome = remove(
                &mut font,
                &mut history,
                RemovalRequest::new("a", "light", selection),
            );
            assert_eq!(outcome, RemovalOutcome::NothingSelected);
        }
        assert!(!history.can_undo());
        assert_eq!(font, before);
    }

    #[test]
    fn test_unknown_glyph_or_layer_fails_without_changes() {
        let mut font = square_font();
        let before = font.clone();
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("zz", "light", Selection::new().with_node(0, 0)),
        );
        assert!(outcome.is_failure());
        assert!(outcome.summary().contains("glyph 'zz' not found"));

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "medium", Selection::new().with_node(0, 0)),
        );
        assert!(outcome.is_failure());

        assert!(!history.can_undo());
        assert_eq!(font, before);
    }

    #[test]
    fn test_layer_that_cannot_take_the_plan_is_skipped() {
        let mut font = square_font();
        {
            let glyph = font.glyph_mut("a").unwrap();
            let light = glyph.layers[0].clone();
            glyph.layers[0] = with_component(with_component(light, "acute", 0.0), "grave", 0.0);
            let bold = glyph.layers[1].clone();
            glyph.layers[1] = with_component(bold, "acute", 20.0);
        }
        let bold_before = layer(&font, "a", "bold").clone();
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_component(1)),
        );

        let report = outcome.report().expect("completed");
        assert_eq!(report.layers.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].layer_id, "bold");
        assert_eq!(
            report.skipped[0].fault,
            LayerFault::ComponentOutOfRange { index: 1, count: 1 }
        );
        assert!(outcome.summary().ends_with("1 layer skipped"));

        assert_eq!(layer(&font, "a", "light").components.len(), 1);
        assert_eq!(layer(&font, "a", "light").components[0].base_glyph, "acute");
        assert_eq!(layer(&font, "a", "bold"), &bold_before);
        assert!(history.can_undo());
    }

    #[test]
    fn test_roles_limit_the_edit() {
        let mut font = square_font();
        {
            let glyph = font.glyph_mut("a").unwrap();
            glyph.layers.push(square("light {120}", LayerRole::Intermediate, 120.0));
            glyph.layers.push(square("bold [alt]", LayerRole::Alternate, 140.0));
            glyph.layers.push(square("light.background", LayerRole::Background, 100.0));
        }
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "light", Selection::new().with_node(0, 1)),
        );
        let report = outcome.report().expect("completed");
        let edited: Vec<&str> = report.layers.iter().map(|l| l.layer_id.as_str()).collect();
        assert_eq!(edited, vec!["light", "bold", "light {120}"]);
        assert_eq!(layer(&font, "a", "bold [alt]").contours[0].points.len(), 4);
        assert_eq!(layer(&font, "a", "light.background").contours[0].points.len(), 4);

        // Alternates can be opted in
        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "bold [alt]", Selection::new().with_node(0, 0))
                .with_eligible_roles(vec![LayerRole::Alternate]),
        );
        let report = outcome.report().expect("completed");
        assert_eq!(report.layers.len(), 1);
        assert_eq!(layer(&font, "a", "bold [alt]").contours[0].points.len(), 3);
        assert_eq!(layer(&font, "a", "light").contours[0].points.len(), 3);
    }

    #[test]
    fn test_open_copy_of_closed_outline_is_left_alone() {
        let lens = |id: &str, closed: bool| {
            let mut layer = crate::core::state::LayerData::new(id, LayerRole::Master);
            let mut contour = ContourData::new(vec![
                PointData::curve(0.0, 0.0),
                PointData::off(0.0, 50.0),
                PointData::off(100.0, 50.0),
                PointData::curve(100.0, 0.0),
                PointData::off(100.0, -50.0),
                PointData::off(0.0, -50.0),
            ]);
            contour.closed = closed;
            layer.contours.push(contour);
            layer
        };
        let mut glyph = GlyphData::new("o");
        glyph.layers = vec![lens("light", true), lens("bold", true), lens("bold.open", false)];
        let mut font = FontData::default();
        font.insert_glyph(glyph);
        let before = font.clone();
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("o", "light", Selection::new().with_node(0, 0)),
        );

        let report = outcome.report().expect("completed");
        let edited: Vec<&str> = report.layers.iter().map(|l| l.layer_id.as_str()).collect();
        assert_eq!(edited, vec!["light", "bold"]);
        assert!(report
            .rejected
            .iter()
            .any(|r| r.id == "bold.open" && r.reason == Rejection::Signature));
        assert_eq!(layer(&font, "o", "bold.open"), layer(&before, "o", "bold.open"));
        assert_eq!(
            LayerSignature::of(layer(&font, "o", "light")),
            LayerSignature::of(layer(&font, "o", "bold"))
        );
    }

    #[test]
    fn test_ineligible_reference_still_edits_masters() {
        let mut font = square_font();
        font.glyph_mut("a")
            .unwrap()
            .layers
            .push(square("bold [alt]", LayerRole::Alternate, 140.0));
        let mut history = EditHistory::new();

        let outcome = remove(
            &mut font,
            &mut history,
            RemovalRequest::new("a", "bold [alt]", Selection::new().with_node(0, 0)),
        );

        let report = outcome.report().expect("completed");
        assert_eq!(report.layers.len(), 2);
        assert_eq!(layer(&font, "a", "bold [alt]").contours[0].points.len(), 4);
        assert_eq!(layer(&font, "a", "light").contours[0].points.len(), 3);
    }
}

#[cfg(test)]
mod backup_tests {
    use super::fixtures::*;
    use crate::core::state::{ContourData, GlyphData, LayerRole, PointData, Selection};
    use crate::editing::{remove_in_compatible_layers, EditHistory, RemovalRequest};

    #[test]
    fn test_backup_writes_decomposed_backgrounds_before_removal() {
        let mut font = square_font();
        let mut comma = GlyphData::new("comma");
        let mut comma_light = crate::core::state::LayerData::new("light", LayerRole::Master);
        comma_light.contours.push(ContourData::new(vec![
            PointData::line(0.0, 0.0),
            PointData::line(10.0, 0.0),
            PointData::line(5.0, -20.0),
        ]));
        comma.layers.push(comma_light);
        font.insert_glyph(comma);
        {
            let glyph = font.glyph_mut("a").unwrap();
            let light = glyph.layers[0].clone();
            glyph.layers[0] = with_component(light, "comma", 200.0);
            // No comma in this layer or any master of it: the backup fails
            let bold = glyph.layers[1].clone();
            glyph.layers[1] = with_component(bold, "missing", 0.0);
        }
        let mut history = EditHistory::new();

        let request = RemovalRequest::new("a", "light", Selection::new().with_node(0, 0))
            .with_backup(true);
        let outcome = remove_in_compatible_layers(&mut font, &mut history, &request);

        let report = outcome.report().expect("completed");
        assert_eq!(
            report.backed_up,
            vec!["light".to_string(), "bold.alt".to_string()]
        );
        assert_eq!(report.backup_failures, vec!["bold".to_string()]);
        assert_eq!(report.layers.len(), 2, "a failed backup does not block the edit");

        let light = layer(&font, "a", "light");
        let background = light.background.as_ref().expect("background");
        assert_eq!(background.contours.len(), 2);
        assert_eq!(background.contours[0].points.len(), 4, "taken before removal");
        assert_eq!(background.contours[1].points[1].x, 210.0);
        assert_eq!(light.contours[0].points.len(), 3);
        assert!(layer(&font, "a", "bold").background.is_none());
        assert!(layer(&font, "a", "bold.alt").background.is_some(), "every master is backed up");

        history.undo(&mut font).unwrap();
        assert!(layer(&font, "a", "light").background.is_none());
    }
}

#[cfg(test)]
mod persistence_tests {
    use super::fixtures::*;
    use crate::core::state::{HintData, NodeRef, Selection};
    use crate::data;
    use crate::editing::{remove_in_compatible_layers, EditHistory, RemovalRequest};

    #[test]
    fn test_json_document_survives_edit_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("font.json");

        let mut font = square_font();
        font.glyph_mut("a").unwrap().layers[0]
            .hints
            .push(HintData::corner("_corner.round", NodeRef::new(0, 1)));
        data::save_font(&font, &path).unwrap();

        let mut loaded = data::load_font(&path).unwrap();
        assert_eq!(loaded.glyphs, font.glyphs);

        let mut history = EditHistory::new();
        let request = RemovalRequest::new("a", "light", Selection::new().with_node(0, 3));
        remove_in_compatible_layers(&mut loaded, &mut history, &request);
        data::save_font(&loaded, &path).unwrap();

        let reloaded = data::load_font(&path).unwrap();
        assert_eq!(layer(&reloaded, "a", "bold").contours[0].points.len(), 3);
        assert_eq!(layer(&reloaded, "a", "light").hints.len(), 1);
    }

    #[test]
    fn test_ufo_layers_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Test.ufo");

        let mut font = square_font();
        {
            let glyph = font.glyph_mut("a").unwrap();
            glyph.layers[0].id = "public.default".to_string();
            glyph.layers[0].name = "public.default".to_string();
            let light = glyph.layers[0].clone();
            glyph.layers[0] = with_anchor(light, "top", 50.0, 100.0);
        }
        data::save_font(&font, &path).unwrap();

        let loaded = data::load_font(&path).unwrap();
        let glyph = loaded.glyph("a").expect("glyph");
        assert_eq!(glyph.layers.len(), 3);
        assert_eq!(glyph.unicode_values, vec!['a']);
        let default = glyph.layer("public.default").expect("default layer");
        assert_eq!(default.contours[0].points.len(), 4);
        assert!(default.anchor("top").is_some());
        assert!(glyph.layer("bold").is_some());
    }
}

#[cfg(test)]
mod cli_tests {
    use super::fixtures::*;
    use crate::core::cli::CliArgs;
    use crate::core::runner::run_command;
    use crate::core::settings::LayerSyncSettings;
    use crate::data;
    use clap::Parser;
    use std::path::Path;

    fn run(args: &[&str]) -> crate::core::errors::LayerSyncResult<()> {
        let mut argv = vec!["layersync"];
        argv.extend_from_slice(args);
        let cli_args = CliArgs::try_parse_from(argv).expect("arguments parse");
        run_command(&cli_args, &LayerSyncSettings::default())
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().expect("utf-8 temp path")
    }

    #[test]
    fn test_remove_saves_json_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("font.json");
        let output = dir.path().join("out.json");
        data::save_font(&square_font(), &input).unwrap();

        run(&[
            "remove", "-f", path_arg(&input), "-g", "a", "-l", "light", "-s", "node:0:3", "-o",
            path_arg(&output),
        ])
        .expect("remove succeeds");

        let saved = data::load_font(&output).unwrap();
        assert_eq!(layer(&saved, "a", "light").contours[0].points.len(), 3);
        assert_eq!(layer(&saved, "a", "bold").contours[0].points.len(), 3);
        assert_eq!(layer(&saved, "a", "bold.alt").contours[0].points.len(), 3);

        let untouched = data::load_font(&input).unwrap();
        assert_eq!(layer(&untouched, "a", "light").contours[0].points.len(), 4);
    }

    #[test]
    fn test_dry_run_and_failures_do_not_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("font.json");
        let output = dir.path().join("out.json");
        data::save_font(&square_font(), &input).unwrap();

        run(&[
            "remove", "-f", path_arg(&input), "-g", "a", "-l", "light", "-s", "node:0:0", "-o",
            path_arg(&output), "--dry-run",
        ])
        .expect("dry run succeeds");
        assert!(!output.exists());

        let result = run(&[
            "remove", "-f", path_arg(&input), "-g", "b", "-l", "light", "-s", "node:0:0", "-o",
            path_arg(&output),
        ]);
        assert!(result.is_err(), "unknown glyph must fail");
        assert!(!output.exists());
    }

    #[test]
    fn test_inspect_reads_sources() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("font.json");
        data::save_font(&square_font(), &input).unwrap();

        assert!(run(&["inspect", "-f", path_arg(&input)]).is_ok());
        assert!(run(&["inspect", "-f", path_arg(&input), "-g", "a"]).is_ok());
        assert!(run(&["inspect", "-f", path_arg(&input), "-g", "zz"]).is_err());
    }

    #[test]
    fn test_ufo_edit_keeps_everything_else_in_the_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ufo = dir.path().join("Test.ufo");

        let mut font = square_font();
        {
            let glyph = font.glyph_mut("a").unwrap();
            glyph.layers[0].id = "public.default".to_string();
            glyph.layers[0].name = "public.default".to_string();
            glyph.layers[0].contours[0].points[0].name = Some("corner".to_string());
        }
        data::save_font(&font, &ufo).unwrap();

        {
            let mut source = norad::Font::load(&ufo).expect("load written UFO");
            source.font_info.family_name = Some("Layersync Test".to_string());
            let glyph = source
                .default_layer_mut()
                .get_glyph_mut("a")
                .expect("glyph a");
            glyph.note = Some("keep me".to_string());
            source.save(&ufo).expect("save UFO");
        }

        run(&[
            "remove", "-f", path_arg(&ufo), "-g", "a", "-l", "public.default", "-s", "node:0:3",
            "--backup",
        ])
        .expect("remove succeeds");

        let saved = norad::Font::load(&ufo).expect("reload UFO");
        assert_eq!(saved.font_info.family_name.as_deref(), Some("Layersync Test"));
        let glyph = saved.default_layer().get_glyph("a").expect("glyph a");
        assert_eq!(glyph.note.as_deref(), Some("keep me"));
        assert_eq!(glyph.contours[0].points.len(), 3);
        assert_eq!(
            glyph.contours[0].points[0].name.as_ref().map(|n| n.as_str()),
            Some("corner")
        );

        let bold = saved
            .layers
            .get("bold")
            .and_then(|layer| layer.get_glyph("a"))
            .expect("bold glyph");
        assert_eq!(bold.contours[0].points.len(), 3);
    }
}
