use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Please fill in all fields to proceed.")]
    IncompleteProfile,
    #[error("Please fill in all fields to submit.")]
    IncompleteChallenges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Profile,
    Challenges,
    Result,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub biz_size: String,
    pub industry: String,
    pub pain_point: String,
    pub ai_familiarity: String,
}

/// Answer fields collected by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    BizSize,
    Industry,
    PainPoint,
    AiFamiliarity,
}

impl AnswerField {
    pub fn get<'a>(&self, answers: &'a Answers) -> &'a str {
        match self {
            AnswerField::BizSize => &answers.biz_size,
            AnswerField::Industry => &answers.industry,
            AnswerField::PainPoint => &answers.pain_point,
            AnswerField::AiFamiliarity => &answers.ai_familiarity,
        }
    }

    pub fn set(&self, answers: &mut Answers, value: String) {
        let slot = match self {
            AnswerField::BizSize => &mut answers.biz_size,
            AnswerField::Industry => &mut answers.industry,
            AnswerField::PainPoint => &mut answers.pain_point,
            AnswerField::AiFamiliarity => &mut answers.ai_familiarity,
        };
        *slot = value;
    }
}

const GENERIC: &str = "Based on your responses, we recommend a tailored strategy to leverage AI and automation for your business growth.";
const BEGINNER: &str = "Your business has significant potential for digital transformation. We recommend starting with our Digital Foundation and exploring Automation Essentials to address core challenges and build efficiency.";
const INTERMEDIATE: &str = "You're on the right track! We suggest focusing on advanced Automation Essentials and exploring specific AI Advantage (AIaaS) solutions that directly address your operational bottlenecks and strategic goals.";
const ADVANCED: &str = "Excellent! You're already well into your AI journey. Let's discuss how our specialized AI Advantage (AIaaS) and strategic partnerships can further amplify your competitive edge and optimize existing implementations.";

/// Recommendation text for an AI familiarity answer
pub fn recommendation(ai_familiarity: &str) -> &'static str {
    match ai_familiarity {
        "none" | "some" => BEGINNER,
        "moderate" => INTERMEDIATE,
        "expert" => ADVANCED,
        _ => GENERIC,
    }
}

/// Two-step wizard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assessment {
    pub step: Step,
    pub answers: Answers,
}

impl Assessment {
    pub fn title(&self) -> &'static str {
        match self.step {
            Step::Profile => "Assess Your AI Readiness (Step 1/2)",
            Step::Challenges => "Assess Your AI Readiness (Step 2/2)",
            Step::Result => "Your AI Readiness Results",
        }
    }

    pub fn next(&mut self) -> Result<(), AssessmentError> {
        if self.step != Step::Profile {
            return Ok(());
        }
        if self.answers.biz_size.is_empty() || self.answers.industry.is_empty() {
            return Err(AssessmentError::IncompleteProfile);
        }
        self.step = Step::Challenges;
        Ok(())
    }

    pub fn prev(&mut self) {
        if self.step == Step::Challenges {
            self.step = Step::Profile;
        }
    }

    pub fn submit(&mut self) -> Result<&'static str, AssessmentError> {
        if self.answers.pain_point.is_empty() || self.answers.ai_familiarity.is_empty() {
            return Err(AssessmentError::IncompleteChallenges);
        }
        self.step = Step::Result;
        Ok(self.result_text())
    }

    pub fn result_text(&self) -> &'static str {
        recommendation(&self.answers.ai_familiarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_filled() -> Assessment {
        let mut a = Assessment::default();
        a.answers.biz_size = "small".into();
        a.answers.industry = "retail".into();
        a
    }

    #[test]
    fn test_profile_step_requires_both_fields() {
        let mut a = Assessment::default();
        a.answers.biz_size = "small".into();
        assert_eq!(a.next(), Err(AssessmentError::IncompleteProfile));
        assert_eq!(a.step, Step::Profile);

        let mut a = profile_filled();
        assert_eq!(a.next(), Ok(()));
        assert_eq!(a.step, Step::Challenges);
        assert_eq!(a.title(), "Assess Your AI Readiness (Step 2/2)");
    }

    #[test]
    fn test_prev_returns_to_profile() {
        let mut a = profile_filled();
        a.next().unwrap();
        a.prev();
        assert_eq!(a.step, Step::Profile);
        assert_eq!(a.answers.industry, "retail");
    }

    #[test]
    fn test_submit_requires_challenges() {
        let mut a = profile_filled();
        a.next().unwrap();
        a.answers.pain_point = "manual-work".into();
        assert_eq!(a.submit(), Err(AssessmentError::IncompleteChallenges));

        a.answers.ai_familiarity = "moderate".into();
        assert_eq!(a.submit(), Ok(INTERMEDIATE));
        assert_eq!(a.step, Step::Result);
        assert_eq!(a.title(), "Your AI Readiness Results");
    }

    #[test]
    fn test_answer_field_access() {
        let mut answers = Answers::default();
        AnswerField::PainPoint.set(&mut answers, "leads".into());
        assert_eq!(answers.pain_point, "leads");
        assert_eq!(AnswerField::PainPoint.get(&answers), "leads");
        assert_eq!(AnswerField::Industry.get(&answers), "");
    }

    #[test]
    fn test_recommendation_by_familiarity() {
        assert_eq!(recommendation("none"), BEGINNER);
        assert_eq!(recommendation("some"), BEGINNER);
        assert_eq!(recommendation("expert"), ADVANCED);
        assert_eq!(recommendation("unsure"), GENERIC);
    }
}
