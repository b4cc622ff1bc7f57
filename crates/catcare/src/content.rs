//! Fixed reference text shown on the leaf pages.

use serde::Serialize;

/// Application title shown on the home page.
pub const APP_TITLE: &str = "Multi-Cat Care Planner";

/// Home page tagline.
pub const TAGLINE: &str =
    "Track feeding, medicine, behaviour, especially helpful for multi-cat/feral care.";

/// Home page prompt next to the "Get started" button.
pub const GET_STARTED_HINT: &str = "Click Get started to add your first cat.";

/// Caption shown on the Add-Cat form.
pub const ADD_CAT_HINT: &str = "After saving, the cat will appear in the sidebar.";

/// Sidebar caption shown while the store is empty.
pub const EMPTY_SIDEBAR_HINT: &str = "No cats yet. Add one from Home.";

/// Closing note on the feral-care page.
pub const FERAL_CARE_NOTE: &str = "This section is educational and applies to all feral cats.";

/// Feature cards on the home page.
pub const HOME_CARDS: [&str; 4] = ["Feeding", "Meds & Vet", "Litter & Supplies", "Feral care"];

/// One FAQ entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// The question.
    pub question: &'static str,
    /// The answer; paragraphs are separated by blank lines.
    pub answer: &'static str,
}

/// One section of the feral-care guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideSection {
    /// Section heading.
    pub heading: &'static str,
    /// Bullet points.
    pub points: &'static [&'static str],
}

/// General questions shown on the FAQ page.
pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Should my cat be attacking me especially at night?",
        answer: "Simple response: NO. Your cat's behaviour is a tell sign of underlying issues, \
                 especially if the cat has a feral background. Attacking, especially at night, \
                 could be a symptom of single cat syndrome, which describes behavioural issues in \
                 solo-raised kittens like rough play biting, excessive vocalizing, clinginess or \
                 destruction, because they miss learning bite inhibition from littermates. \
                 Solutions include enrichment activities, lots of play or simply adopting another cat.",
    },
    FaqEntry {
        question: "Why is my cat eating plastic and other inedible things?",
        answer: "Cats eat inedible things due to pica, which is chewing or eating non-food items \
                 like fabric, plastic or soil, and can lead to serious health issues like \
                 intestinal blockages. Causes range from stress and boredom to medical conditions \
                 such as hyperthyroidism, anemia or nutritional deficiencies. Solutions include \
                 changing your cat's diet and seeing a vet to understand the cause.\n\n\
                 WARNING: monitor closely, intestinal blockages can be deadly. Common dangerous \
                 items: wet wipes, tissue, cotton, hair bands.",
    },
    FaqEntry {
        question: "Why is my cat constantly hiding?",
        answer: "If your cat was feral at one point, hiding can be normal. Over time, this may \
                 improve. Avoid forcing interaction; some cats are naturally more timid. Also, \
                 kittens can inherit wary behaviour from feral mothers.",
    },
    FaqEntry {
        question: "When to see a vet?",
        answer: "If you've recently caught a feral cat, keep it separated from other pets. Feral \
                 cats can carry worms, fleas and diseases. See a vet as soon as possible.\n\n\
                 Note: if you treat one cat for fleas/worms, ask your vet about treating all cats \
                 in the household.",
    },
    FaqEntry {
        question: "Why does my cat have spots on its chin/around its mouth?",
        answer: "This is often feline acne. Keep food and water bowls clean, consider stainless \
                 steel bowls, and keep the area dry.",
    },
    FaqEntry {
        question: "Why is my cat's belly so round?",
        answer: "If it's very firm or your cat seems unwell, see a vet. A round belly can be \
                 parasites, diet issues or other causes.",
    },
    FaqEntry {
        question: "What are the litter box basics?",
        answer: "A common guideline is one litter box per cat (plus one extra if possible). Scoop \
                 daily and change litter regularly.",
    },
    FaqEntry {
        question: "What should I do if my cat doesn't like my new kitten?",
        answer: "Slow introductions are best: separate spaces, scent swapping, supervised short \
                 meetings. Don't force contact.",
    },
    FaqEntry {
        question: "How to discipline my cat?",
        answer: "Try to change the environment instead (cat-proofing), reward good behaviour, and \
                 redirect with play. Avoid punishment.",
    },
];

/// The feral-care guide.
pub const FERAL_CARE: &[GuideSection] = &[
    GuideSection {
        heading: "Feeding feral cats",
        points: &[
            "Consistent feeding times",
            "Remove food after 30-45 minutes",
            "Avoid free-feeding",
        ],
    },
    GuideSection {
        heading: "Shelter",
        points: &["Insulated boxes", "Dry bedding (straw, not blankets)"],
    },
    GuideSection {
        heading: "Medical & TNR",
        points: &[
            "Trap-Neuter-Return basics",
            "Post-surgery monitoring",
            "When to intervene",
        ],
    },
    GuideSection {
        heading: "Behavior & Safety",
        points: &[
            "Avoid direct handling",
            "Watch body language",
            "Gradual trust building",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entries() {
        assert_eq!(FAQ.len(), 9);
        for entry in FAQ {
            assert!(entry.question.ends_with('?'));
            assert!(!entry.answer.is_empty());
        }
    }

    #[test]
    fn test_feral_care_sections() {
        let headings: Vec<_> = FERAL_CARE.iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec!["Feeding feral cats", "Shelter", "Medical & TNR", "Behavior & Safety"]
        );
        assert!(FERAL_CARE.iter().all(|s| !s.points.is_empty()));
    }
}
