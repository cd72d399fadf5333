use lyric_scope::{analyze, analyze_with, build_insights, Hyperparameters, RhymeRule, ScoreDimension};
use serde_json::Value;

const PERFECT_RHYME: &str = "I saw a cat\nShe wore a hat\nHe swung the bat\nWe sat on the mat";

const EIGHT_SYLLABLES: &str = "\
we ride the road down to the sea
and all the stars burn bright for me
the moon will keep its watch on us
till dawn is gold and we go home";

const SONG: &str = "\
Walking through the city lights
Chasing shadows every night
Hearts are racing, feel the fire
Lifting up and climbing higher

Hold me close and never go
Dance until the morning glow
Hold me close and never go
Dance until the morning glow

Silent streets and empty rooms
Whisper secrets to the moon
Every tear becomes a song
Every road will lead me home

Hold me close and never go
Dance until the morning glow
Hold me close and never go
Dance until the morning glow";

fn all_scores(result: &lyric_scope::AnalysisResult) -> Vec<f64> {
    let mut scores = vec![
        result.complexity.creativity,
        result.complexity.diversity,
        result.complexity.emotion,
        result.complexity.structure,
        result.complexity.score,
        result.complexity.confidence,
        result.flow.consistency,
        result.flow.rhyme,
        result.flow.confidence,
        result.energy.level,
        result.energy.confidence,
        result.energy.signals.punctuation,
        result.energy.signals.repetition,
        result.energy.signals.vocabulary,
        result.dashboard.headline,
    ];
    for d in &result.dashboard.dimensions {
        scores.push(d.score);
        scores.push(d.confidence);
    }
    scores
}

#[test]
fn scores_stay_in_range() {
    let shouting = "ALL CAPS SHOUTING!!! ".repeat(50);
    let long = SONG.repeat(20);
    let samples = [
        "",
        "!!!!!!!!",
        "A",
        "la la la la la la",
        "caf\u{e9} \u{f1}and\u{fa} \u{65e5}\u{672c}\u{8a9e}\nstra\u{df}e \u{2019}til dawn",
        shouting.as_str(),
        long.as_str(),
        PERFECT_RHYME,
        SONG,
    ];
    for text in samples {
        let result = analyze(text);
        for score in all_scores(&result) {
            assert!(
                (0.0..=100.0).contains(&score),
                "score {score} out of range for {text:?}"
            );
        }
    }
}

#[test]
fn analysis_is_deterministic() {
    let a = serde_json::to_string(&analyze(SONG)).unwrap();
    let b = serde_json::to_string(&analyze(SONG)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_input_is_neutral() {
    for text in ["", "   \n\t\n  "] {
        let result = analyze(text);
        let scores: Vec<(&str, f64, f64)> = result
            .dashboard
            .dimensions
            .iter()
            .map(|d| (d.name.as_str(), d.score, d.confidence))
            .collect();
        assert_eq!(
            scores,
            vec![
                ("complexity", 0.0, 0.0),
                ("rhyme", 0.0, 0.0),
                ("flow", 50.0, 0.0),
                ("energy", 0.0, 0.0),
                ("structure", 0.0, 0.0),
            ]
        );
        assert!(result.insights.is_empty());
        assert_eq!(result.flow.scheme, "insufficient-data");
        assert_eq!(result.metadata.word_count, 0);
        assert_eq!(result.metadata.estimated_minutes, 0);
        assert_eq!(result.dashboard.headline, 10.0);
    }
}

#[test]
fn perfect_rhyme_scores_high() {
    let result = analyze(PERFECT_RHYME);
    assert_eq!(result.flow.scheme, "AAAA");
    assert_eq!(result.flow.rhyme, 100.0);
    assert_eq!(result.metadata.scheme, "AAAA");
    let letters: Vec<&str> = result.flow.per_line.iter().map(|l| l.letter.as_str()).collect();
    assert_eq!(letters, vec!["A", "A", "A", "A"]);
}

#[test]
fn uniform_syllables_give_perfect_flow() {
    let result = analyze(EIGHT_SYLLABLES);
    for line in &result.flow.per_line {
        assert_eq!(line.syllables, 8, "line {}", line.line);
    }
    assert_eq!(result.flow.consistency, 100.0);
    assert_eq!(result.dimension("flow").unwrap().score, 100.0);
}

#[test]
fn uneven_lines_lower_flow() {
    let result = analyze("go\nwe wander through the endless evening light together\nstop\nsing");
    assert!(result.flow.consistency < 50.0);
}

#[test]
fn repeated_line_raises_repetition_signal() {
    let hook = "we ride the night away tonight\n".repeat(5);
    let control = "\
silver rivers wander past the town
quiet lanterns flicker in rain
old companions gather by candles
distant engines murmur over hills
patient gardens sleep beneath snow";
    let hooked = analyze(&hook);
    let plain = analyze(control);
    assert!(
        hooked.energy.signals.repetition > plain.energy.signals.repetition,
        "{} vs {}",
        hooked.energy.signals.repetition,
        plain.energy.signals.repetition
    );
}

#[test]
fn exclamations_raise_energy() {
    let calm = analyze("we walk along the shore\nthe tide is slow and grey");
    let loud = analyze("we walk along the SHORE!\nthe tide is slow and grey!!");
    assert!(loud.energy.signals.punctuation > calm.energy.signals.punctuation);
    assert!(loud.energy.level > calm.energy.level);
}

#[test]
fn diversity_boundaries() {
    let unique = analyze("every single word here appears exactly once without any repeats");
    assert_eq!(unique.complexity.diversity, 100.0);

    let one_word = analyze(&"la ".repeat(40));
    assert!(one_word.complexity.diversity <= 5.0);
}

#[test]
fn insights_follow_deviation_order() {
    let dims: Vec<ScoreDimension> = ["complexity", "rhyme", "flow", "energy", "structure"]
        .iter()
        .zip([90.0, 60.0, 40.0, 20.0, 55.0])
        .map(|(name, score)| ScoreDimension::new(name, score, 80.0, Value::Null))
        .collect();
    let insights = build_insights(&dims, Hyperparameters::DEFAULT.insight_threshold);
    assert_eq!(insights.len(), 2);
    assert!(insights[0].contains("complexity 90"));
    assert!(insights[1].contains("energy 20"));
}

#[test]
fn result_insights_match_dashboard() {
    let result = analyze(SONG);
    let expected = build_insights(
        &result.dashboard.dimensions,
        Hyperparameters::DEFAULT.insight_threshold,
    );
    assert_eq!(result.insights, expected);
    assert!(!result.insights.is_empty());
}

#[test]
fn chorus_song_has_structure() {
    let song = analyze(SONG);
    let block = analyze(&SONG.replace("\n\n", "\n"));
    assert!(song.complexity.chorus_detected);
    assert_eq!(song.metadata.stanza_count, 4);
    assert!(song.complexity.structure > block.complexity.structure);
    assert_eq!(block.metadata.stanza_count, 1);
}

#[test]
fn free_form_without_rhymes() {
    let result = analyze("the river bends\nthe mountain sleeps\na candle glows\nthe city wakes");
    assert_eq!(result.flow.scheme, "free-form");
    assert_eq!(result.flow.rhyme, 0.0);
}

#[test]
fn exact_rule_from_config() {
    let hp = Hyperparameters::from_toml_str("[rhyme_rule]\nkind = \"exact\"\n").unwrap();
    assert_eq!(hp.rhyme_rule, RhymeRule::Exact);
    let result = analyze_with("my cat\nyour hat", &hp);
    assert_eq!(result.flow.scheme, "free-form");
    let default = analyze("my cat\nyour hat");
    assert_eq!(default.flow.scheme, "AA");
}

#[test]
fn unvalidated_tunables_do_not_panic() {
    let hp = Hyperparameters {
        words_per_minute: 0,
        flow_cv_cap: 0.0,
        full_confidence_lines: 0,
        full_confidence_words: 0,
        repetition_window: 0,
        repetition_line_window: 0,
        scheme_lookback: 0,
        scheme_label_lines: 0,
        rhyme_key_chars: 0,
        emotion_scale: f64::NAN,
        punctuation_scale: f64::INFINITY,
        insight_threshold: f64::NAN,
        ..Hyperparameters::DEFAULT
    };
    assert!(hp.validate().is_err());
    for text in ["", "la la\nla la", SONG, PERFECT_RHYME] {
        let result = analyze_with(text, &hp);
        for score in all_scores(&result) {
            assert!((0.0..=100.0).contains(&score), "score {score} for {text:?}");
        }
    }

    let short = analyze_with("la la\nla la", &hp);
    assert_eq!(short.metadata.estimated_minutes, 4);

    let flat = Hyperparameters {
        flow_cv_cap: 0.0,
        ..Hyperparameters::DEFAULT
    };
    let uniform = analyze_with("my cat\nyour hat\nthe bat", &flat);
    assert_eq!(uniform.flow.consistency, 100.0);
}

#[test]
fn metadata_counts() {
    let result = analyze("Hello there, world\n...\n\nsing it loud");
    assert_eq!(result.metadata.word_count, 6);
    assert_eq!(result.metadata.line_count, 3);
    assert_eq!(result.metadata.estimated_minutes, 1);
    assert!(result.metadata.syllable_count >= 6);
    assert_eq!(result.dashboard.total_syllables, result.metadata.syllable_count);
}

#[test]
fn json_output_shape() {
    let result = analyze(SONG);
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    for key in ["complexity", "flow", "energy", "dashboard", "insights", "metadata"] {
        assert!(parsed.get(key).is_some(), "missing {key}");
    }
    assert!(parsed["flow"]["perLine"].is_array());
    assert!(parsed["flow"]["scheme"].is_string());
    for signal in ["punctuation", "repetition", "vocabulary"] {
        assert!(parsed["energy"]["signals"][signal].is_number());
    }
    let names: Vec<&str> = parsed["dashboard"]["dimensions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["complexity", "rhyme", "flow", "energy", "structure"]);
    assert!(parsed["metadata"]["wordCount"].is_u64());
}

#[test]
fn score_rows_flatten_dimensions() {
    let result = analyze(PERFECT_RHYME);
    let rows = result.score_rows();
    assert_eq!(rows.len(), 5);
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[1]["type"], "rhyme");
    assert_eq!(json[1]["score"], 100.0);
    assert!(json[2]["details"]["perLine"].is_array());
}
