// SPDX-License-Identifier: MPL-2.0
use pain_map::app::config::{self, Config};
use pain_map::diagram::{self, DiagramPoint, DiagramSource};
use pain_map::domain::body::{DiagramVariant, Gender, Side, View, ZoneCatalog, ZoneId};
use pain_map::domain::interaction::PulseDuration;
use pain_map::i18n::fluent::I18n;
use pain_map::record::{JsonLinesSink, PainRecordDraft, RecordSink};
use pain_map::ui::body_map::{self, Effect};
use pain_map::ui::diagram_pane;
use pain_map::ui::zone_overlay::OverlayEvent;
use std::sync::Arc;
use std::time::Instant;
use tempfile::tempdir;

fn zone(raw: &str) -> ZoneId {
    ZoneId::new(raw).expect("non-empty id")
}

async fn embedded(variant: DiagramVariant) -> Arc<diagram::DiagramScene> {
    diagram::load(
        Arc::new(DiagramSource::Embedded),
        Arc::new(ZoneCatalog::builtin()),
        variant,
    )
    .await
    .expect("embedded diagram loads")
}

#[tokio::test(flavor = "multi_thread")]
async fn every_embedded_variant_loads_with_regions() {
    for gender in Gender::ALL {
        for side in Side::ALL {
            for view in View::ALL {
                let scene = embedded(DiagramVariant::new(gender, side, view)).await;
                assert!(!scene.regions().is_empty(), "{:?} {:?} {:?}", gender, side, view);
                let (width, height) = scene.size();
                assert!(width > 0.0 && height > 0.0);
            }
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn chest_point_hits_the_numbered_zone() {
    let scene = embedded(DiagramVariant::full(Gender::Male, Side::Front)).await;

    let region = scene
        .hit_test(DiagramPoint::new(100.0, 182.0))
        .expect("point lies on the trunk");
    assert_eq!(region.id().as_str(), "1_1_24");
    assert_eq!(region.label().text(), "1.1.24");

    let head = scene
        .hit_test(DiagramPoint::new(100.0, 41.0))
        .expect("point lies on the head");
    assert!(head.id().is_head());

    assert!(scene.hit_test(DiagramPoint::new(1.0, 1.0)).is_none());
}

#[test]
fn catalog_misses_fall_back_to_a_derived_label() {
    let catalog = ZoneCatalog::builtin();
    let label = catalog.resolve(&zone("9_9_99"));
    assert_eq!(label.text(), "9.9.99");
    assert!(label.is_unknown());
}

#[tokio::test(flavor = "multi_thread")]
async fn body_map_reports_the_clicked_zone() {
    let scene = embedded(DiagramVariant::full(Gender::Male, Side::Front)).await;
    let (mut state, _task) = body_map::State::new(
        Arc::new(DiagramSource::Embedded),
        Arc::new(ZoneCatalog::builtin()),
        Gender::Male,
        Side::Front,
        PulseDuration::default(),
    );

    let (effect, _) = state.handle_message(body_map::Message::Pane(
        diagram_pane::Message::Loaded {
            generation: 1,
            result: Ok(scene),
        },
    ));
    assert_eq!(effect, Effect::None);

    let (effect, _) = state.handle_message(body_map::Message::Pane(
        diagram_pane::Message::Overlay(OverlayEvent::Clicked {
            generation: 1,
            zone: zone("1_1_24"),
            at: Instant::now(),
        }),
    ));

    match effect {
        Effect::ZonePicked(selection) => {
            assert_eq!(selection.zone_code.as_str(), "1_1_24");
            assert_eq!(selection.zone_name, "1.1.24");
            assert_eq!(selection.gender_code, Gender::Male);
            assert_eq!(selection.side, Side::Front);
        }
        other => panic!("expected a pick, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn body_map_head_click_opens_the_close_up() {
    let scene = embedded(DiagramVariant::full(Gender::Female, Side::Back)).await;
    let (mut state, _task) = body_map::State::new(
        Arc::new(DiagramSource::Embedded),
        Arc::new(ZoneCatalog::builtin()),
        Gender::Female,
        Side::Back,
        PulseDuration::default(),
    );
    let _ = state.handle_message(body_map::Message::Pane(diagram_pane::Message::Loaded {
        generation: 1,
        result: Ok(scene),
    }));

    let (effect, _) = state.handle_message(body_map::Message::Pane(
        diagram_pane::Message::Overlay(OverlayEvent::Clicked {
            generation: 1,
            zone: zone("head"),
            at: Instant::now(),
        }),
    ));

    assert_eq!(effect, Effect::None);
    assert_eq!(state.view_state().view(), View::Head);
    assert_eq!(state.view_state().gender(), Gender::Female);
    assert_eq!(state.view_state().side(), Side::Back);
    assert!(state.pane().is_loading());
}

#[tokio::test(flavor = "multi_thread")]
async fn directory_source_reads_diagrams_from_disk() {
    let dir = tempdir().expect("temp dir");
    let diagrams = dir.path().join("pain-map");
    std::fs::create_dir_all(&diagrams).expect("create diagram dir");
    std::fs::write(
        diagrams.join("Male_full_front.svg"),
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40">
            <path id="7_07" d="M0 0 L40 0 L40 40 L0 40 Z" fill="#ccc"/>
        </svg>"##,
    )
    .expect("write diagram");

    let source = Arc::new(DiagramSource::Directory(dir.path().to_path_buf()));
    let scene = diagram::load(
        source.clone(),
        Arc::new(ZoneCatalog::builtin()),
        DiagramVariant::full(Gender::Male, Side::Front),
    )
    .await
    .expect("diagram loads from disk");

    let region = scene
        .hit_test(DiagramPoint::new(20.0, 20.0))
        .expect("square covers the drawing");
    assert_eq!(region.id().as_str(), "7_07");

    let missing = diagram::load(
        source,
        Arc::new(ZoneCatalog::builtin()),
        DiagramVariant::full(Gender::Female, Side::Front),
    )
    .await;
    assert!(missing.is_err());
}

#[test]
fn language_follows_the_saved_config() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.general.language = Some("ru".to_string());
    saved.diagram.initial_gender = Some(Gender::Female);
    config::save_to_path(&saved, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded.initial_gender(), Gender::Female);
    assert_eq!(loaded.initial_side(), Side::Front);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");

    let overridden = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(overridden.current_locale().to_string(), "en-US");
}

#[test]
fn json_lines_sink_writes_one_object_per_record() {
    let mut sink = JsonLinesSink::new(Vec::new());
    for raw in ["1_1_24", "1_01"] {
        let draft = PainRecordDraft {
            zone_code: zone(raw),
            zone_name: raw.replace('_', "."),
            gender_code: Gender::Male,
            side: Side::Back,
            recorded_at: chrono::Utc::now(),
        };
        sink.submit(&draft).expect("write succeeds");
    }

    let output = String::from_utf8(sink.into_inner()).expect("utf-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json");
    assert_eq!(first["zone_code"], "1_1_24");
    assert_eq!(first["zone_name"], "1.1.24");
    assert_eq!(first["gender_code"], "male");
    assert_eq!(first["side"], "back");
}
