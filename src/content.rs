//! Static informational content shown by the content screens.

/// An external reading suggestion.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// A titled group of resources.
#[derive(Debug, Clone, Copy)]
pub struct ResourceCategory {
    pub category: &'static str,
    pub items: &'static [Resource],
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A titled block of prose.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub const TAGLINE: &str = "Know your heart risk factors in under a minute";

pub const HOME_FEATURES: &[Section] = &[
    Section {
        title: "Quick Assessment",
        paragraphs: &["Eleven questions about your age, blood pressure, cholesterol and lifestyle."],
    },
    Section {
        title: "Transparent Scoring",
        paragraphs: &["Every point of the score is traceable to a single factor you entered."],
    },
    Section {
        title: "Private by Default",
        paragraphs: &["Nothing leaves this machine and nothing is saved after you quit."],
    },
];

pub const ABOUT: &[Section] = &[
    Section {
        title: "What is Heart Disease?",
        paragraphs: &[
            "Heart disease refers to various conditions that affect your heart's structure and function. \
             It remains one of the leading causes of death globally, but early detection and lifestyle \
             changes can significantly reduce risks.",
            "Common types include coronary artery disease, heart rhythm problems (arrhythmias), \
             and heart valve disease. Understanding your risk factors is crucial for prevention \
             and early intervention.",
        ],
    },
    Section {
        title: "Data Collection",
        paragraphs: &["You enter basic health measurements and lifestyle information on a single form."],
    },
    Section {
        title: "Analysis",
        paragraphs: &["Each answer is compared against fixed clinical thresholds and converted into points."],
    },
    Section {
        title: "Risk Assessment",
        paragraphs: &["The points are added up and the total is placed in a low, moderate or high band."],
    },
    Section {
        title: "Recommendations",
        paragraphs: &["Advisories are listed for every threshold your profile crosses."],
    },
];

/// Rows of the model explanation table: factor, condition, points.
pub const SCORING_TABLE: &[(&str, &str, &str)] = &[
    ("Age", "over 60 / 41-60 / 40 or under", "+3 / +2 / +1"),
    ("Sex", "male", "+1"),
    ("Chest pain", "typical / atypical / non-anginal / none", "+3 / +2 / +1 / 0"),
    ("Blood pressure", "resting > 140 or second reading > 130", "+3"),
    ("", "else resting > 120 or second reading > 110", "+2"),
    ("Cholesterol", "over 240 / 201-240 / 200 or under", "+3 / +2 / 0"),
    ("Max heart rate", "above 220 minus age", "+2"),
    ("Thalassemia", "fixed / reversible defect / normal", "+3 / +2 / 0"),
    ("Diabetes", "yes", "+2"),
    ("Smoking", "yes", "+2"),
    ("Obesity", "yes", "+2"),
];

pub const MODEL_NOTES: &[&str] = &[
    "This is a fixed additive heuristic, not a trained statistical model.",
    "Score 8 or below is low risk, 9 to 15 moderate, 16 or above high.",
    "Within a factor only the highest matching tier counts; factors add independently.",
];

pub const RESOURCES: &[ResourceCategory] = &[
    ResourceCategory {
        category: "Heart Health Basics",
        items: &[
            Resource {
                title: "Understanding Heart Disease",
                source: "American Heart Association",
                url: "https://www.heart.org",
                description: "Comprehensive guide to heart disease, its types, and prevention strategies.",
            },
            Resource {
                title: "Heart Disease Prevention",
                source: "CDC",
                url: "https://www.cdc.gov/heartdisease",
                description: "Official CDC resources on heart disease prevention and risk factors.",
            },
        ],
    },
    ResourceCategory {
        category: "Lifestyle & Prevention",
        items: &[
            Resource {
                title: "Heart-Healthy Diet",
                source: "National Heart, Lung, and Blood Institute",
                url: "https://www.nhlbi.nih.gov",
                description: "Dietary guidelines and meal planning for heart health.",
            },
            Resource {
                title: "Exercise Guidelines",
                source: "WHO",
                url: "https://www.who.int",
                description: "Physical activity recommendations for cardiovascular health.",
            },
        ],
    },
];

pub const RESOURCES_DISCLAIMER: &str = "The resources provided here are for informational purposes only. \
     Always consult with healthcare professionals for medical advice and treatment decisions.";

pub const CONTACT_EMAIL: &str = "support@heartcheck.example.com";

pub const FAQ: &[Faq] = &[
    Faq {
        question: "How accurate is the risk score?",
        answer: "It is a screening heuristic built from common risk thresholds. \
                 Results should be confirmed by healthcare professionals.",
    },
    Faq {
        question: "Is my data stored?",
        answer: "No. Values live in memory only while a result is shown and are wiped afterwards.",
    },
];

pub const DISCLAIMER: &str = "DISCLAIMER: This tool provides indicative estimates and does not replace \
     professional medical evaluation.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_table_covers_every_factor() {
        let factors: Vec<&str> = SCORING_TABLE
            .iter()
            .map(|(factor, _, _)| *factor)
            .filter(|f| !f.is_empty())
            .collect();
        assert_eq!(factors.len(), crate::domain::RiskFactor::ALL.len());
        for factor in crate::domain::RiskFactor::ALL {
            assert!(factors.contains(&factor.label()), "{}", factor.label());
        }
    }

    #[test]
    fn test_resource_urls_are_https() {
        assert!(RESOURCES
            .iter()
            .flat_map(|c| c.items.iter())
            .all(|r| r.url.starts_with("https://")));
    }
}
