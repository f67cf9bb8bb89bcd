//! Core types for TUI screens and navigation

/// Application screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// User id and password entry
    Login,
    /// Working-professional onboarding form
    WorkingProfessional,
    /// College-student onboarding form
    CollegeStudent,
    /// Course discovery home page
    Home,
    /// Enrolled course progress view
    CourseProgress,
    /// SkillFit performance dashboard
    SkillfitDashboard,
    /// Live SkillFit assessment
    SkillfitAssessment,
    /// Revision notes and practice questions
    ReviseYoda,
}

/// Cards on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCard {
    /// Featured course, ready to enroll
    FeaturedCourse,
    /// SkillFit assessment teaser
    SkillfitAssessment,
    /// Study-abroad teaser
    StudyAbroad,
}

impl HomeCard {
    /// Get all cards in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::FeaturedCourse,
            Self::SkillfitAssessment,
            Self::StudyAbroad,
        ]
    }

    /// Get display label for card
    pub fn label(&self) -> &'static str {
        match self {
            Self::FeaturedCourse => "Intro to Object Oriented Programming",
            Self::SkillfitAssessment => "SkillFit Assessment",
            Self::StudyAbroad => "Study Abroad",
        }
    }

    /// Get description for card
    pub fn description(&self) -> &str {
        match self {
            Self::FeaturedCourse => "Enroll now!",
            Self::SkillfitAssessment => {
                "Give a test and see where you stand among others in your profession"
            }
            Self::StudyAbroad => "Explore courses based on your current background",
        }
    }
}

/// Actions on the course progress page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAction {
    /// Open the SkillFit dashboard
    SeeDashboard,
    /// Start the SkillFit assessment
    SkillfitAssessment,
    /// Open revision notes
    ReviseWithYoda,
    /// Resume the course player
    ContinueLearning,
}

impl CourseAction {
    /// Get all actions in display order
    pub fn all() -> Vec<Self> {
        vec![
            Self::SeeDashboard,
            Self::SkillfitAssessment,
            Self::ReviseWithYoda,
            Self::ContinueLearning,
        ]
    }

    /// Get display label for action
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeeDashboard => "See Dashboard",
            Self::SkillfitAssessment => "Skillfit Assessment",
            Self::ReviseWithYoda => "Revise with Yoda",
            Self::ContinueLearning => "Continue Learning",
        }
    }

    /// Get description for action
    pub fn description(&self) -> &str {
        match self {
            Self::SeeDashboard => "Leaderboards, goals and performance summary",
            Self::SkillfitAssessment => "Adaptive test on the modules you completed",
            Self::ReviseWithYoda => "AI summary and practice questions",
            Self::ContinueLearning => "Resume from where you left off",
        }
    }
}

/// Tabs on the revision page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviseTab {
    /// AI summary notes
    Notes,
    /// Short lecture clips
    ShortClips,
}

impl ReviseTab {
    /// Get display label for tab
    pub fn label(&self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::ShortClips => "Short Lecture Clips",
        }
    }

    /// Get the other tab
    pub fn toggled(&self) -> Self {
        match self {
            Self::Notes => Self::ShortClips,
            Self::ShortClips => Self::Notes,
        }
    }
}
