use post_optimizer::config::EngineConfig;
use post_optimizer::rules::{Rule, RuleCategory, RuleTable};
use post_optimizer::scoring::recommendations::{
    ADD_CALL_TO_ACTION, ADD_COMMUNITY_LANGUAGE, ADD_QUESTION, ADD_SHAREABLE_VALUE, CONSIDER_THREAD,
};
use post_optimizer::scoring::safety::MUTED_WARNING_TYPE;
use post_optimizer::scoring::AnalysisPipeline;
use post_optimizer::{analyze, analyze_with_config, AnalyzeOptions, MediaType, Predictions, RiskLevel};

fn options(media_type: MediaType) -> AnalyzeOptions {
    AnalyzeOptions {
        media_type,
        ..AnalyzeOptions::default()
    }
}

fn long_text(chars: usize) -> String {
    "Our team spent the quarter rebuilding the sync engine from scratch. "
        .repeat(10)
        .chars()
        .take(chars)
        .collect()
}

#[test]
fn empty_text_keeps_baselines() {
    let result = analyze("", &AnalyzeOptions::default());

    assert_eq!(result.char_count, 0);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.predictions, Predictions::default());
    assert_eq!(result.predictions.values(), [30, 40, 25, 20, 25]);
    assert_eq!(result.scores.safety, 100);
    assert_eq!(result.scores.content_quality, 60);
    assert_eq!(result.scores.format, 45);
    assert_eq!(result.scores.overall, 48);
    assert!(result.factors.is_empty());
}

#[test]
fn launch_post_scenario() {
    let text = "Check out our new launch! #new #launch #crypto #gm Thoughts?";
    let result = analyze(text, &AnalyzeOptions::default());

    assert_eq!(result.predictions.reply, 42);
    assert_eq!(result.predictions.favorite, 40);
    assert_eq!(result.predictions.click, 33);
    assert_eq!(result.predictions.repost, 20);
    assert_eq!(result.predictions.follow_author, 39);
    assert_eq!(result.scores.content_quality, 70);
    assert_eq!(result.scores.safety, 92);
    assert_eq!(result.scores.format, 50);
    assert_eq!(result.scores.overall, 53);

    let factors: Vec<(&str, &str)> = result
        .factors
        .iter()
        .map(|factor| (factor.signal.as_str(), factor.impact.as_str()))
        .collect();
    assert_eq!(
        factors,
        vec![
            ("reply", "+12"),
            ("click", "+8"),
            ("follow_author", "+6"),
            ("follow_author", "+8"),
            ("content_quality", "+10"),
            ("spam", "-8"),
        ]
    );

    assert_eq!(result.warnings_of_type("spam").count(), 1);
    let muted: Vec<_> = result.warnings_of_type(MUTED_WARNING_TYPE).collect();
    assert_eq!(muted.len(), 1);
    assert_eq!(muted[0].risk, Some(RiskLevel::High));

    // Has a question mark, so no question recommendation.
    assert!(!result.has_recommendation(ADD_QUESTION));
    assert!(result.has_recommendation(ADD_CALL_TO_ACTION));
}

#[test]
fn scam_and_hard_sell_scenario() {
    let result = analyze("100x guaranteed returns, buy now!", &AnalyzeOptions::default());

    assert_eq!(result.scores.safety, 65);
    assert!(result.scores.safety <= 65);

    let negative: Vec<_> = result
        .warnings
        .iter()
        .filter(|warning| warning.warning_type == "report" || warning.warning_type == "not_interested")
        .collect();
    assert_eq!(negative.len(), 2);
    assert_eq!(negative[0].warning_type, "report");
    assert_eq!(negative[1].warning_type, "not_interested");

    assert!(result
        .factors
        .iter()
        .any(|factor| factor.signal == "report" && factor.impact == "-20"));
    assert!(result
        .factors
        .iter()
        .any(|factor| factor.signal == "not_interested" && factor.impact == "-15"));
}

#[test]
fn stacked_triggers_add_up() {
    let text = "100x GUARANTEED RETURNS BUY NOW LIKE IF YOU AGREE SHUT UP IDIOTS #A #B #C #D #E";
    let result = analyze(text, &AnalyzeOptions::default());
    // -20 -15 -12 -15 from triggers, -8 hashtags, -10 caps
    assert_eq!(result.scores.safety, 20);
    assert_eq!(result.warnings_of_type("spam").count(), 2);
    assert_eq!(result.warnings_of_type("block").count(), 1);
}

#[test]
fn safety_never_goes_negative() {
    let mut table = RuleTable::builtin().unwrap();
    table.extend(
        RuleCategory::NegativeTriggers,
        vec![Rule::try_pattern(r"(?i)scam", -150, "report", "heavy trigger").unwrap()],
    );
    let pipeline = AnalysisPipeline::new(&table, &EngineConfig::default());
    let result = pipeline.run("total scam, buy now", &AnalyzeOptions::default());

    assert_eq!(result.scores.safety, 0);
    assert!(result
        .factors
        .iter()
        .any(|factor| factor.impact == "-150"));
}

#[test]
fn question_mark_lifts_reply_by_booster_weight() {
    let base = "We shipped a new dashboard today.";
    let before = analyze(base, &AnalyzeOptions::default());
    let after = analyze(&format!("{} Is it useful?", base), &AnalyzeOptions::default());

    assert!(before.predictions.reply < 50);
    assert_eq!(after.predictions.reply - before.predictions.reply, 12);
}

#[test]
fn predictions_are_capped_at_100() {
    let text = "What do you think? Hot take? Let me know? Agree or disagree? Tell me? Reply with one?";
    let mut table = RuleTable::builtin().unwrap();
    table.extend(
        RuleCategory::ReplyBoosters,
        vec![Rule::try_pattern(r"(?i)reply", 60, "reply", "test booster").unwrap()],
    );
    let pipeline = AnalysisPipeline::new(&table, &EngineConfig::default());
    let result = pipeline.run(text, &AnalyzeOptions::default());

    assert_eq!(result.predictions.reply, 100);
}

#[test]
fn predictions_never_drop_below_zero() {
    let mut table = RuleTable::builtin().unwrap();
    table.extend(
        RuleCategory::ReplyBoosters,
        vec![Rule::try_pattern(r"(?i)\bmeh\b", -50, "reply", "flat reaction").unwrap()],
    );
    let pipeline = AnalysisPipeline::new(&table, &EngineConfig::default());
    let result = pipeline.run("meh", &AnalyzeOptions::default());
    assert_eq!(result.predictions.reply, 0);

    let mut config = EngineConfig::default();
    config.baselines.click = -10;
    let result = analyze_with_config("hello", &AnalyzeOptions::default(), &config);
    assert_eq!(result.predictions.click, 0);
    for value in result.predictions.values() {
        assert!((0..=100).contains(&value));
    }
}

#[test]
fn extended_booster_keeps_its_own_label() {
    let mut table = RuleTable::builtin().unwrap();
    table.extend(
        RuleCategory::ShareBoosters,
        vec![Rule::try_pattern(r"(?i)\bcheat sheet\b", 9, "bookmark", "Reference material").unwrap()],
    );
    let pipeline = AnalysisPipeline::new(&table, &EngineConfig::default());
    let result = pipeline.run("my cheat sheet", &AnalyzeOptions::default());

    assert_eq!(result.predictions.repost, 34);
    assert!(result
        .factors
        .iter()
        .any(|factor| factor.signal == "bookmark" && factor.impact == "+9"));
}

#[test]
fn strict_media_parse_rejects_unknown_labels() {
    assert_eq!(MediaType::parse(" Video "), Ok(MediaType::Video));
    let err = MediaType::parse("gif").unwrap_err();
    assert!(err.contains("unknown media type 'gif'"));
}

#[test]
fn extended_category_feeds_scoring() {
    let mut table = RuleTable::builtin().unwrap();
    let before = table.len();
    table.extend(
        RuleCategory::NegativeTriggers,
        vec![Rule::try_pattern(r"(?i)\bspam me\b", -30, "report", "custom trigger").unwrap()],
    );
    assert_eq!(table.len(), before + 1);

    let pipeline = AnalysisPipeline::new(&table, &EngineConfig::default());
    let result = pipeline.run("please spam me", &AnalyzeOptions::default());
    assert_eq!(result.scores.safety, 70);
    assert_eq!(result.warnings[0].message, "custom trigger");
}

#[test]
fn invalid_custom_pattern_is_an_error() {
    assert!(Rule::try_pattern("(unclosed", 5, "reply", "broken").is_err());
}

#[test]
fn format_pass_rewards_length_and_media() {
    let ideal = long_text(150);
    assert_eq!(analyze(&ideal, &options(MediaType::None)).scores.format, 60);
    assert_eq!(analyze(&ideal, &options(MediaType::Video)).scores.format, 80);
    assert_eq!(analyze(&ideal, &options(MediaType::Image)).scores.format, 75);
    assert_eq!(analyze(&ideal, &options(MediaType::Thread)).scores.format, 70);

    let short = analyze("Short one", &options(MediaType::Video));
    assert_eq!(short.scores.format, 65);
    assert_eq!(short.warnings_of_type("length").count(), 1);
    assert!(short.factors.iter().any(|factor| factor.signal == "P(video_view)"));
}

#[test]
fn unknown_media_label_behaves_like_none() {
    let parsed: AnalyzeOptions =
        serde_json::from_str(r#"{"mediaType": "hologram", "hasLink": true}"#).unwrap();
    assert_eq!(parsed.media_type, MediaType::None);
    assert!(parsed.has_link);

    let text = long_text(120);
    assert_eq!(
        analyze(&text, &parsed).scores,
        analyze(&text, &options(MediaType::None)).scores
    );
}

#[test]
fn content_quality_hook_is_anchored() {
    let hooked = analyze("BREAKING: 3 new features", &AnalyzeOptions::default());
    assert_eq!(hooked.scores.content_quality, 86);

    let unhooked = analyze("Not breaking: 3 new features", &AnalyzeOptions::default());
    assert_eq!(unhooked.scores.content_quality, 78);
}

#[test]
fn recommendations_follow_fixed_order() {
    let text = long_text(300);
    let result = analyze(&text, &AnalyzeOptions::default());

    let actions: Vec<&str> = result
        .recommendations
        .iter()
        .map(|recommendation| recommendation.action.as_str())
        .collect();
    assert_eq!(
        actions,
        vec![
            ADD_QUESTION,
            ADD_CALL_TO_ACTION,
            ADD_SHAREABLE_VALUE,
            CONSIDER_THREAD,
            ADD_COMMUNITY_LANGUAGE,
        ]
    );

    let as_thread = analyze(&text, &options(MediaType::Thread));
    assert!(!as_thread.has_recommendation(CONSIDER_THREAD));
}

#[test]
fn custom_baselines_shift_predictions() {
    let mut config = EngineConfig::default();
    config.baselines.reply = 55;
    let result = analyze_with_config("Hello there", &AnalyzeOptions::default(), &config);

    assert_eq!(result.predictions.reply, 55);
    assert!(!result.has_recommendation(ADD_QUESTION));
}

#[test]
fn analysis_is_repeatable() {
    let text = "NEW: our 5 tips guide for builders 🧵 What do you think?";
    let opts = options(MediaType::Image);
    let first = serde_json::to_string(&analyze(text, &opts)).unwrap();
    let second = serde_json::to_string(&analyze(text, &opts)).unwrap();
    assert_eq!(first, second);
}
