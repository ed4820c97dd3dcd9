//! Course studio - the host-facing facade.
//!
//! Wires the canvas engine, the deferred task queue and user notices the way
//! the authoring workspace uses them: simulated course generation, optimization
//! suggestions, AI enhancement of single nodes, guarded deletion and export.
//! Nothing here talks to a real model; every "AI" result is a template applied
//! after a fixed delay.

use crate::constants::{
    CASE_STUDY_COUNT, CASE_STUDY_OFFSET, CASE_STUDY_STAGGER_MS, ENHANCE_DELAY_MS,
    FIT_AFTER_BUILD_MS, GENERATION_DELAY_MS, INTERACTION_OFFSET, INTERACTION_STAGGER_MS,
    SUGGESTION_DELAY_MS, SUGGESTION_NODE_SIZE,
};
use crate::course::{CourseOutline, build_course};
use crate::engine::CanvasEngine;
use crate::error::{CanvasError, CanvasResult};
use crate::export::{ExportFormat, ExportedFile, export};
use crate::hierarchy::{CourseReview, CourseTree};
use crate::notifications::{Notice, NoticeCenter};
use crate::perf::{PerfMonitor, measure};
use crate::surface::{ContainerSurface, ContentSurface, FixedContainer, Scene};
use crate::tasks::{CancellationToken, TaskQueue, TaskReport, TaskTarget};
use crate::types::{Node, NodeId, NodeOptions, NodeType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::{info, warn};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Optimization suggestions offered after review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suggestion {
    /// An "Interactive discussion" topic under every chapter
    Interaction,
    /// A "Case study" topic under a few randomly picked topics
    CaseStudies,
}

impl Suggestion {
    fn label(&self) -> &'static str {
        match self {
            Suggestion::Interaction => "suggest_interaction",
            Suggestion::CaseStudies => "suggest_case_studies",
        }
    }

    pub fn progress_message(&self) -> &'static str {
        match self {
            Suggestion::Interaction => "Adding interactive sessions to the course...",
            Suggestion::CaseStudies => "Adding practical case studies...",
        }
    }

    pub fn node_title(&self) -> &'static str {
        match self {
            Suggestion::Interaction => "Interactive discussion",
            Suggestion::CaseStudies => "Case study",
        }
    }

    fn stagger(&self) -> Duration {
        match self {
            Suggestion::Interaction => ms(INTERACTION_STAGGER_MS),
            Suggestion::CaseStudies => ms(CASE_STUDY_STAGGER_MS),
        }
    }

    fn offset(&self) -> (f64, f64) {
        match self {
            Suggestion::Interaction => INTERACTION_OFFSET,
            Suggestion::CaseStudies => CASE_STUDY_OFFSET,
        }
    }
}

/// AI toolbox actions on a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnhanceAction {
    Expand,
    Simplify,
    Quiz,
    Example,
}

impl EnhanceAction {
    pub fn progress_message(&self) -> &'static str {
        match self {
            EnhanceAction::Expand => "Expanding node content...",
            EnhanceAction::Simplify => "Simplifying node content...",
            EnhanceAction::Quiz => "Generating quiz questions...",
            EnhanceAction::Example => "Generating a related example...",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            EnhanceAction::Expand => {
                "Expanded with practical cases, supporting theory and step-by-step guidance."
            }
            EnhanceAction::Simplify => "Condensed to the key points.",
            EnhanceAction::Quiz => "Quiz: 3 multiple-choice and 2 true/false questions.",
            EnhanceAction::Example => "Example: a real-world case drawn from the resource library.",
        }
    }

    /// New content after applying the action to `content`.
    ///
    /// Simplify keeps only the first paragraph; every action appends its
    /// template as a new paragraph.
    pub fn apply(&self, content: Option<&str>) -> String {
        let base = match self {
            EnhanceAction::Simplify => content.and_then(|c| c.split("\n\n").next()),
            _ => content,
        }
        .map(str::trim)
        .filter(|c| !c.is_empty());

        match base {
            Some(base) => format!("{}\n\n{}", base, self.template()),
            None => self.template().to_string(),
        }
    }
}

/// Everything deferred tasks may touch.
pub struct StudioState<C: ContentSurface, V: ContainerSurface> {
    pub engine: CanvasEngine<C, V>,
    pub notices: NoticeCenter,
    pub perf: PerfMonitor,
    rng: StdRng,
}

impl<C: ContentSurface, V: ContainerSurface> TaskTarget for StudioState<C, V> {
    fn generation(&self) -> u64 {
        self.engine.generation()
    }

    fn contains_node(&self, id: &NodeId) -> bool {
        self.engine.contains(id)
    }
}

impl<C: ContentSurface, V: ContainerSurface> StudioState<C, V> {
    fn suggestion_targets(&mut self, suggestion: Suggestion) -> Vec<NodeId> {
        let of_type = |ty: NodeType| -> Vec<NodeId> {
            self.engine
                .nodes()
                .iter()
                .filter(|n| n.node_type == ty)
                .map(|n| n.id.clone())
                .collect()
        };

        match suggestion {
            Suggestion::Interaction => of_type(NodeType::Chapter),
            Suggestion::CaseStudies => {
                let topics = of_type(NodeType::Topic);
                topics
                    .choose_multiple(&mut self.rng, CASE_STUDY_COUNT)
                    .cloned()
                    .collect()
            }
        }
    }

    fn add_suggested_node(&mut self, parent: &NodeId, suggestion: Suggestion) {
        let Some(anchor) = self.engine.node(parent).map(Node::rect) else {
            return;
        };
        let (dx, dy) = suggestion.offset();
        let node = self.engine.create_node(
            NodeType::Topic,
            suggestion.node_title(),
            anchor.min_x() + dx,
            anchor.min_y() + dy,
            NodeOptions::new().with_size(SUGGESTION_NODE_SIZE.0, SUGGESTION_NODE_SIZE.1),
        );
        if let Err(e) = self.engine.add_node(node, Some(parent)) {
            warn!(parent = %parent, "Failed to add suggested node: {}", e);
        }
    }
}

/// Host facade over engine, tasks and notices.
pub struct CourseStudio<
    C: ContentSurface + 'static = Scene,
    V: ContainerSurface + 'static = FixedContainer,
> {
    state: StudioState<C, V>,
    tasks: TaskQueue<StudioState<C, V>>,
    generation_token: Option<CancellationToken>,
}

impl CourseStudio<Scene, FixedContainer> {
    pub fn headless(width: f64, height: f64) -> Self {
        Self::new(CanvasEngine::headless(width, height))
    }
}

impl<C: ContentSurface + 'static, V: ContainerSurface + 'static> CourseStudio<C, V> {
    pub fn new(engine: CanvasEngine<C, V>) -> Self {
        Self::with_rng(engine, StdRng::from_entropy())
    }

    /// Deterministic random choices (case study targets).
    pub fn with_seed(engine: CanvasEngine<C, V>, seed: u64) -> Self {
        Self::with_rng(engine, StdRng::seed_from_u64(seed))
    }

    fn with_rng(engine: CanvasEngine<C, V>, rng: StdRng) -> Self {
        Self {
            state: StudioState {
                engine,
                notices: NoticeCenter::new(),
                perf: PerfMonitor::new(),
                rng,
            },
            tasks: TaskQueue::new(),
            generation_token: None,
        }
    }

    pub fn engine(&self) -> &CanvasEngine<C, V> {
        &self.state.engine
    }

    pub fn engine_mut(&mut self) -> &mut CanvasEngine<C, V> {
        &mut self.state.engine
    }

    pub fn notices(&self) -> &NoticeCenter {
        &self.state.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeCenter {
        &mut self.state.notices
    }

    /// Timings of task runs and course builds.
    pub fn perf(&self) -> &PerfMonitor {
        &self.state.perf
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.pending()
    }

    pub fn now(&self) -> Duration {
        self.tasks.now()
    }

    /// Advance the studio clock: notices age, marker animations tick, then
    /// every deferred task that falls due runs.
    pub fn advance(&mut self, elapsed: Duration) -> TaskReport {
        self.state.notices.advance(elapsed);
        self.state.engine.tick(elapsed);
        let (report, elapsed_ms) = measure(|| self.tasks.advance(elapsed, &mut self.state));
        if !report.ran.is_empty() {
            self.state.perf.record_operation("run_tasks", elapsed_ms);
            self.state.perf.log_summary_if_slow();
        }
        report
    }

    /// Replace the canvas with `outline` after the simulated generation delay,
    /// then fit it to the screen. A newer request supersedes a pending one.
    pub fn generate_course(&mut self, outline: CourseOutline) {
        if let Some(previous) = self.generation_token.take() {
            previous.cancel();
        }
        let token = CancellationToken::for_canvas(self.state.engine.generation());
        self.generation_token = Some(token.clone());

        info!(title = %outline.title, "Course generation scheduled");
        self.state
            .notices
            .push(Notice::info("Generating course structure..."));

        self.tasks.schedule(
            ms(GENERATION_DELAY_MS),
            "generate_course",
            Some(token),
            move |state, spawner| {
                state.engine.clear();
                let built = state
                    .perf
                    .time("build_course", || build_course(&mut state.engine, &outline));
                match built {
                    Ok(_) => {
                        state.notices.push(Notice::success(format!(
                            "Generated {} chapters and {} topics",
                            outline.chapters.len(),
                            outline.topic_count()
                        )));
                        let token = CancellationToken::for_canvas(state.engine.generation());
                        spawner.schedule(
                            ms(FIT_AFTER_BUILD_MS),
                            "fit_to_screen",
                            Some(token),
                            |state, _| {
                                state.engine.fit_to_screen();
                            },
                        );
                    }
                    Err(e) => {
                        warn!("Course generation failed: {}", e);
                        state
                            .notices
                            .push(Notice::error(format!("Course generation failed: {}", e)));
                    }
                }
            },
        );
    }

    /// Apply a suggestion after a short delay, adding its nodes one by one.
    pub fn apply_suggestion(&mut self, suggestion: Suggestion) {
        self.state
            .notices
            .push(Notice::info(suggestion.progress_message()));
        let token = CancellationToken::for_canvas(self.state.engine.generation());

        self.tasks.schedule(
            ms(SUGGESTION_DELAY_MS),
            suggestion.label(),
            Some(token),
            move |state, spawner| {
                let targets = state.suggestion_targets(suggestion);
                let generation = state.engine.generation();
                for (index, target) in targets.into_iter().enumerate() {
                    let token = CancellationToken::for_node(generation, target.clone());
                    spawner.schedule(
                        suggestion.stagger() * index as u32,
                        "add_suggested_node",
                        Some(token),
                        move |state, _| state.add_suggested_node(&target, suggestion),
                    );
                }
                state.notices.push(Notice::success("Suggestion applied"));
            },
        );
    }

    /// Rewrite a node's content with an AI toolbox action after a delay.
    pub fn ai_enhance(&mut self, id: &NodeId, action: EnhanceAction) -> CanvasResult<()> {
        if !self.state.engine.contains(id) {
            return Err(CanvasError::NodeNotFound(id.clone()));
        }
        self.state
            .notices
            .push(Notice::info(action.progress_message()));

        let token = CancellationToken::for_node(self.state.engine.generation(), id.clone());
        let id = id.clone();
        self.tasks.schedule(
            ms(ENHANCE_DELAY_MS),
            "ai_enhance",
            Some(token),
            move |state, _| {
                let current = state.engine.node(&id).and_then(|n| n.content.clone());
                let updated = action.apply(current.as_deref());
                if state.engine.set_node_content(&id, Some(updated)).is_ok() {
                    state.notices.push(Notice::success("AI enhancement complete"));
                }
            },
        );
        Ok(())
    }

    /// Delete a node, surfacing a root deletion attempt as a warning notice.
    pub fn delete_node(&mut self, id: &NodeId) -> CanvasResult<Node> {
        let result = self.state.engine.delete_node(id);
        if let Err(CanvasError::RootDeletion) = result {
            self.state
                .notices
                .push(Notice::warning("The root node cannot be deleted"));
        }
        result
    }

    /// Export the canvas, reporting the outcome as a notice.
    pub fn export(&mut self, format: ExportFormat) -> CanvasResult<ExportedFile> {
        let result = export(&self.state.engine.snapshot(), format);
        let notice = match &result {
            Ok(file) => Notice::success(format!("Exported {}", file.file_name)),
            Err(CanvasError::EmptyCanvas) => Notice::error("Nothing to export"),
            Err(e) => Notice::error(format!("{} export failed: {}", format.label(), e)),
        };
        self.state.notices.push(notice);
        result
    }

    pub fn review(&self) -> CourseReview {
        CourseReview::analyze(&self.state.engine.snapshot())
    }

    /// Course tree for the preview panel.
    pub fn preview(&self) -> CanvasResult<CourseTree<'_>> {
        CourseTree::build(&self.state.engine.snapshot())
    }
}
