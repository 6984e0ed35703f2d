use crate::bridge::{ContentBridge, ContentFormat};
use crate::problem::Answer;

/// Whether the feedback fields of one answer are shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackVisibility {
    visible: bool,
}

impl FeedbackVisibility {
    pub fn for_answer(answer: &Answer) -> Self {
        FeedbackVisibility { visible: answer.has_feedback() }
    }

    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Show or hide the fields. Hiding is refused while the answer has
    /// feedback, saved or still in the editor. Returns the resulting visibility.
    pub fn toggle<B: ContentBridge + ?Sized>(&mut self, open: bool, answer: &Answer, bridge: &B) -> bool {
        let unsaved = bridge
            .fetch_content(ContentFormat::Html)
            .is_some_and(|content| content.has_feedback(&answer.id));
        self.visible = open || answer.has_feedback() || unsaved;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{NoContent, StoredContent};

    #[test]
    fn starts_visible_with_stored_feedback() {
        let mut answer = Answer::blank("A".into());
        assert!(!FeedbackVisibility::for_answer(&answer).is_visible());
        answer.unselected_feedback = "nope".into();
        assert!(FeedbackVisibility::for_answer(&answer).is_visible());
    }

    #[test]
    fn hides_when_empty() {
        let answer = Answer::blank("A".into());
        let mut visibility = FeedbackVisibility::default();
        assert!(visibility.toggle(true, &answer, &NoContent));
        assert!(!visibility.toggle(false, &answer, &NoContent));
    }

    #[test]
    fn stays_open_with_stored_feedback() {
        let mut answer = Answer::blank("A".into());
        answer.selected_feedback = "yes".into();
        let mut visibility = FeedbackVisibility::for_answer(&answer);
        assert!(visibility.toggle(false, &answer, &NoContent));
    }

    #[test]
    fn stays_open_with_unsaved_feedback() {
        let answer = Answer::blank("B".into());
        let mut content = StoredContent::default();
        content.set_selected_feedback("B", "<p>typing</p>");
        let mut visibility = FeedbackVisibility::default();
        visibility.toggle(true, &answer, &content);
        assert!(visibility.toggle(false, &answer, &content));

        content.set_selected_feedback("A", "other answer");
        content.set_selected_feedback("B", "");
        assert!(!visibility.toggle(false, &answer, &content));
    }
}
