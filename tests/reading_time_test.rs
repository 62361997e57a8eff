use site_utils::core::reading_time::strip_markup;
use site_utils::{reading_time, word_count, ReadingTimeEstimator};

fn lorem(n: usize) -> String {
    (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_empty_input_reads_in_zero_seconds() {
    let estimate = reading_time("");
    assert_eq!(estimate.minutes, 0);
    assert_eq!(estimate.seconds, 0);
    assert_eq!(estimate.text, "0 sec");
}

#[test]
fn test_two_hundred_words_is_one_minute() {
    let estimate = reading_time(&lorem(200));
    assert_eq!((estimate.minutes, estimate.seconds), (1, 0));
    assert_eq!(estimate.text, "1 min");
}

#[test]
fn test_two_hundred_fifty_words() {
    let estimate = reading_time(&lorem(250));
    assert_eq!((estimate.minutes, estimate.seconds), (1, 15));
    assert_eq!(estimate.text, "1 min 15 sec");
}

#[test]
fn test_markup_matches_plain_text() {
    let html = "<p>Hello <b>world</b></p>";
    assert_eq!(word_count(html), word_count("Hello world"));
    assert_eq!(reading_time(html), reading_time("Hello world"));
}

#[test]
fn test_rendered_post_body() {
    let body = format!(
        "<article>\n  <h1 class=\"title\">Getting started</h1>\n  <p>{}</p>\n  <img src=\"/images/a.png\" alt=\"diagram\">\n  <p>{}</p>\n</article>",
        lorem(300),
        lorem(98)
    );
    // "Getting started" + 300 + 98
    assert_eq!(word_count(&body), 400);
    assert_eq!(reading_time(&body).text, "2 min");
    assert!(!strip_markup(&body).contains('<'));
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(word_count("  one \n\n two\t\tthree   "), 3);
}

#[test]
fn test_estimate_serializes_for_templates() -> anyhow::Result<()> {
    let estimator = ReadingTimeEstimator::new(60)?;
    let estimate = estimator.estimate(&lorem(90));
    let json = serde_json::to_value(&estimate)?;
    assert_eq!(json["minutes"], 1);
    assert_eq!(json["seconds"], 30);
    assert_eq!(json["text"], "1 min 30 sec");
    Ok(())
}
