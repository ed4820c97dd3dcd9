//! Course outline data and its layout onto the canvas.

use crate::constants::{
    CHAPTER_ORIGIN, CHAPTER_SIZE, CHAPTER_SPACING_X, ROOT_ORIGIN, ROOT_SIZE, TOPIC_OFFSET,
    TOPIC_SIZE, TOPIC_STEP,
};
use crate::engine::CanvasEngine;
use crate::error::{CanvasError, CanvasResult};
use crate::profile_scope;
use crate::surface::{ContainerSurface, ContentSurface};
use crate::types::{NodeId, NodeOptions, NodeType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseOutline {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterOutline>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChapterOutline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub topics: Vec<TopicOutline>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicOutline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl CourseOutline {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn topic_count(&self) -> usize {
        self.chapters.iter().map(|c| c.topics.len()).sum()
    }

    /// Explicit chapter and topic ids, in layout order.
    fn explicit_ids(&self) -> impl Iterator<Item = &str> {
        self.chapters.iter().flat_map(|chapter| {
            chapter
                .id
                .as_deref()
                .into_iter()
                .chain(chapter.topics.iter().filter_map(|t| t.id.as_deref()))
        })
    }

    /// The management training course used by the demo workspace.
    pub fn demo() -> Self {
        let topic = |id: &str, title: &str, content: &str, source: &str| TopicOutline {
            id: Some(id.to_string()),
            title: title.to_string(),
            content: Some(content.to_string()),
            sources: vec![source.to_string()],
        };

        Self {
            title: "Team Management for Product Managers".to_string(),
            content: None,
            chapters: vec![
                ChapterOutline {
                    id: Some("ch1".to_string()),
                    title: "Shifting to a Management Mindset".to_string(),
                    content: Some("From individual contributor to manager".to_string()),
                    sources: vec!["chunk_1".to_string(), "chunk_2".to_string()],
                    topics: vec![
                        topic(
                            "t1_1",
                            "Rethinking your role",
                            "What a manager is responsible for and how they create value",
                            "chunk_1",
                        ),
                        topic(
                            "t1_2",
                            "From doing to enabling",
                            "Getting work done through others instead of by hand",
                            "chunk_2",
                        ),
                    ],
                },
                ChapterOutline {
                    id: Some("ch2".to_string()),
                    title: "Communication and Feedback".to_string(),
                    content: Some("Building effective team communication".to_string()),
                    sources: vec!["chunk_3".to_string(), "chunk_4".to_string()],
                    topics: vec![
                        topic(
                            "t2_1",
                            "One-on-one conversations",
                            "Cadence and essentials of personal check-ins",
                            "chunk_3",
                        ),
                        topic(
                            "t2_2",
                            "Constructive feedback",
                            "Giving useful positive and corrective feedback",
                            "chunk_4",
                        ),
                    ],
                },
            ],
        }
    }
}

/// Lay `outline` out as root -> chapters -> topics and add it to `engine`.
///
/// Does not clear the canvas first. Returns the root id. Id conflicts are
/// found before anything is added, so a failed build leaves `engine` as it was.
pub fn build_course<C: ContentSurface, V: ContainerSurface>(
    engine: &mut CanvasEngine<C, V>,
    outline: &CourseOutline,
) -> CanvasResult<NodeId> {
    profile_scope!("build_course");

    check_ids(engine, outline)?;

    let mut root = engine.create_node(
        NodeType::Root,
        outline.title.clone(),
        ROOT_ORIGIN.0,
        ROOT_ORIGIN.1,
        NodeOptions::new().with_size(ROOT_SIZE.0, ROOT_SIZE.1),
    );
    root.content = outline.content.clone();
    let root_id = engine.add_node(root, None)?;

    for (i, chapter) in outline.chapters.iter().enumerate() {
        let x = CHAPTER_ORIGIN.0 + CHAPTER_SPACING_X * i as f64;
        let y = CHAPTER_ORIGIN.1;

        let mut options = NodeOptions::new()
            .with_size(CHAPTER_SIZE.0, CHAPTER_SIZE.1)
            .with_sources(chapter.sources.iter().cloned());
        if let Some(id) = &chapter.id {
            options = options.with_id(id.clone());
        }
        let mut node = engine.create_node(NodeType::Chapter, chapter.title.clone(), x, y, options);
        node.content = chapter.content.clone();
        let chapter_id = engine.add_node(node, Some(&root_id))?;

        for (j, topic) in chapter.topics.iter().enumerate() {
            let tx = x + TOPIC_OFFSET.0 + TOPIC_STEP.0 * j as f64;
            let ty = y + TOPIC_OFFSET.1 + TOPIC_STEP.1 * j as f64;

            let mut options = NodeOptions::new()
                .with_size(TOPIC_SIZE.0, TOPIC_SIZE.1)
                .with_sources(topic.sources.iter().cloned());
            if let Some(id) = &topic.id {
                options = options.with_id(id.clone());
            }
            let mut node = engine.create_node(NodeType::Topic, topic.title.clone(), tx, ty, options);
            node.content = topic.content.clone();
            engine.add_node(node, Some(&chapter_id))?;
        }
    }

    info!(
        title = %outline.title,
        chapters = outline.chapters.len(),
        topics = outline.topic_count(),
        "Built course"
    );
    Ok(root_id)
}

fn check_ids<C: ContentSurface, V: ContainerSurface>(
    engine: &CanvasEngine<C, V>,
    outline: &CourseOutline,
) -> CanvasResult<()> {
    if engine.root().is_some() {
        return Err(CanvasError::DuplicateRoot);
    }
    let mut seen = HashSet::new();
    for id in outline.explicit_ids() {
        let id = NodeId::from(id);
        if engine.contains(&id) || !seen.insert(id.clone()) {
            return Err(CanvasError::DuplicateNode(id));
        }
    }
    Ok(())
}
