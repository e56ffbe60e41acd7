//! Deterministic metadata synthesis.

use reelsmith_core::text;

use crate::brief::MetadataBrief;
use crate::metadata::{Chapter, VideoMetadata};

/// Platform title field limit (YouTube).
const TITLE_MAX_CHARS: usize = 100;

/// Seconds between consecutive chapter markers.
const CHAPTER_SPACING_SECONDS: usize = 45;

/// Keywords seeded regardless of the brief.
const SEED_KEYWORDS: &[&str] = &["youtube", "creator workflow", "video production"];

/// Builds a publish-ready metadata package from a distribution brief.
#[must_use]
pub fn build_metadata(brief: &MetadataBrief) -> VideoMetadata {
    VideoMetadata {
        title: compose_title(brief),
        description: compose_description(brief),
        keywords: compose_keywords(brief),
        chapters: compose_chapters(&brief.plan_details.storyline),
        optimisation_tips: compose_tips(brief),
    }
}

/// Title from topic plus a fragment of the plan's hook, clipped to the
/// platform limit.
fn compose_title(brief: &MetadataBrief) -> String {
    let fragment = text::lead(&brief.plan_details.hook, 7);
    let raw = if fragment.is_empty() {
        brief.plan.topic.clone()
    } else {
        format!("{}: {fragment}", brief.plan.topic)
    };
    text::clip(&raw, TITLE_MAX_CHARS)
}

/// Multi-paragraph description referencing the plan's hook, storyline, and
/// call to action plus the mood and goal from the brief.
fn compose_description(brief: &MetadataBrief) -> String {
    let plan = &brief.plan_details;
    let mut paragraphs = Vec::new();

    if !plan.hook.is_empty() {
        paragraphs.push(plan.hook.clone());
    }

    paragraphs.push(format!(
        "Made for {}. The {} angle runs through every beat, start to finish.",
        text::clip(&brief.plan.audience, 80),
        text::clip(&brief.mood, 80),
    ));

    if !plan.storyline.is_empty() {
        let beats: Vec<String> = plan
            .storyline
            .iter()
            .map(|beat| text::lead(beat, 6))
            .collect();
        paragraphs.push(format!("What's covered: {}.", beats.join(" / ")));
    }

    if !plan.cta.is_empty() {
        paragraphs.push(format!("Before you go: {}.", plan.cta.trim_end_matches('.')));
    }

    paragraphs.push(format!(
        "Published to {}.",
        text::clip(&brief.platform_goal, 80)
    ));

    paragraphs.join("\n\n")
}

/// Deduplicated blend of topic, audience, and mood terms plus the fixed
/// platform seeds, first occurrence wins.
fn compose_keywords(brief: &MetadataBrief) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    let topic_phrase = brief.plan.topic.trim().to_lowercase();
    if !topic_phrase.is_empty() {
        push_unique(&mut keywords, text::clip(&topic_phrase, 60));
    }

    for source in [&brief.plan.topic, &brief.plan.audience, &brief.mood] {
        for word in text::significant_words(source) {
            push_unique(&mut keywords, word);
        }
    }

    for seed in SEED_KEYWORDS {
        push_unique(&mut keywords, (*seed).to_owned());
    }

    keywords
}

fn push_unique(keywords: &mut Vec<String>, candidate: String) {
    if !keywords.contains(&candidate) {
        keywords.push(candidate);
    }
}

/// Walks the storyline and assigns evenly spaced, monotonically increasing
/// timestamps. An empty storyline yields no chapters.
fn compose_chapters(storyline: &[String]) -> Vec<Chapter> {
    storyline
        .iter()
        .enumerate()
        .map(|(index, beat)| Chapter {
            label: chapter_label(index, beat),
            timestamp: format_timestamp(index.saturating_mul(CHAPTER_SPACING_SECONDS)),
        })
        .collect()
}

fn chapter_label(index: usize, beat: &str) -> String {
    let summary = text::lead(beat, 6);
    let summary = summary.trim_end_matches([':', ',', '.']);
    if summary.is_empty() {
        format!("Chapter {}", index + 1)
    } else {
        text::clip(summary, 48)
    }
}

fn format_timestamp(total_seconds: usize) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Small fixed-size advisory list parameterized by the platform goal.
fn compose_tips(brief: &MetadataBrief) -> Vec<String> {
    let goal = brief.platform_goal.to_lowercase();

    let keyword_anchor = text::significant_words(&brief.plan.topic)
        .into_iter()
        .next()
        .unwrap_or_else(|| "your topic".to_owned());

    let focus = if goal.contains("subscri") {
        "Pin a comment asking one question and route end screens straight at the subscribe card."
            .to_owned()
    } else if goal.contains("rank") || goal.contains("search") || goal.contains("seo") {
        "Mirror the title keyword in the filename, first description line, and first chapter label."
            .to_owned()
    } else if goal.contains("watch") || goal.contains("retention") {
        "Cut anything that delays the first payoff past the 30-second mark.".to_owned()
    } else {
        format!(
            "Align the first 30 seconds with the stated goal: {}.",
            text::clip(&brief.platform_goal, 60)
        )
    };

    vec![
        format!("Front-load \"{keyword_anchor}\" in the title and the first description line."),
        "Keep chapters under a minute so the progress bar shows steady movement.".to_owned(),
        focus,
        "Review click-through and retention 48 hours after publish and retitle if both lag."
            .to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::PlanSummary;
    use reelsmith_core::plan::VideoPlan;

    fn sample_plan() -> VideoPlan {
        VideoPlan {
            hook: "Stop scrolling: the energetic take on AI workflow.".to_owned(),
            storyline: vec![
                "Cold open: tease the end result.".to_owned(),
                "Stakes: name the problem.".to_owned(),
                "Core walkthrough: three moves.".to_owned(),
            ],
            shots: vec!["Tight talking-head framing.".to_owned()],
            broll: vec!["Close-up inserts.".to_owned()],
            cta: "Subscribe".to_owned(),
            voice_over: vec!["Beat 1 VO: tease the end result.".to_owned()],
        }
    }

    fn sample_brief() -> MetadataBrief {
        MetadataBrief {
            plan: PlanSummary {
                topic: "AI automation for creators".to_owned(),
                audience: "YouTube creators scaling workflows".to_owned(),
            },
            mood: "Bold, tactical, motivating".to_owned(),
            platform_goal: "drive subscribers".to_owned(),
            plan_details: sample_plan(),
        }
    }

    #[test]
    fn test_build_metadata_is_deterministic() {
        let brief = sample_brief();

        assert_eq!(build_metadata(&brief), build_metadata(&brief));
    }

    #[test]
    fn test_keywords_contain_no_duplicates() {
        // Arrange: topic, audience, and mood all repeat "creators".
        let mut brief = sample_brief();
        brief.plan.audience = "creators".to_owned();
        brief.mood = "creators creators".to_owned();

        // Act
        let metadata = build_metadata(&brief);

        // Assert
        let mut seen = metadata.keywords.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), metadata.keywords.len());
    }

    #[test]
    fn test_chapters_match_storyline_length_with_non_decreasing_timestamps() {
        let brief = sample_brief();

        let metadata = build_metadata(&brief);

        assert_eq!(metadata.chapters.len(), brief.plan_details.storyline.len());
        assert_eq!(metadata.chapters[0].timestamp, "00:00");
        let seconds: Vec<usize> = metadata
            .chapters
            .iter()
            .map(|c| {
                let (m, s) = c.timestamp.split_once(':').unwrap();
                m.parse::<usize>().unwrap() * 60 + s.parse::<usize>().unwrap()
            })
            .collect();
        assert!(seconds.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_empty_storyline_yields_empty_chapters() {
        let mut brief = sample_brief();
        brief.plan_details.storyline = Vec::new();

        let metadata = build_metadata(&brief);

        assert!(metadata.chapters.is_empty());
    }

    #[test]
    fn test_title_respects_platform_limit() {
        let mut brief = sample_brief();
        brief.plan.topic = "supercut ".repeat(40);

        let metadata = build_metadata(&brief);

        assert!(metadata.title.chars().count() <= 100);
    }

    #[test]
    fn test_description_references_hook_and_cta() {
        let brief = sample_brief();

        let metadata = build_metadata(&brief);

        assert!(metadata.description.contains("Stop scrolling"));
        assert!(metadata.description.contains("Subscribe"));
        assert!(metadata.description.contains("\n\n"));
    }

    #[test]
    fn test_tips_are_parameterized_by_goal() {
        // Arrange
        let mut subscriber_brief = sample_brief();
        subscriber_brief.platform_goal = "drive subscribers".to_owned();
        let mut search_brief = sample_brief();
        search_brief.platform_goal = "rank for tutorials".to_owned();

        // Act
        let subscriber_tips = build_metadata(&subscriber_brief).optimisation_tips;
        let search_tips = build_metadata(&search_brief).optimisation_tips;

        // Assert
        assert_eq!(subscriber_tips.len(), 4);
        assert_eq!(search_tips.len(), 4);
        assert_ne!(subscriber_tips, search_tips);
        assert!(subscriber_tips.iter().any(|t| t.contains("subscribe")));
    }

    #[test]
    fn test_blank_hook_still_yields_a_title_and_description() {
        let mut brief = sample_brief();
        brief.plan_details.hook = String::new();

        let metadata = build_metadata(&brief);

        assert!(metadata.title.starts_with("AI automation for creators"));
        assert!(!metadata.description.is_empty());
    }
}
