#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Registration,
    Pricing,
    Therapy,
    Features,
    Support,
    General,
}

// Checked in order; the first category with a matching keyword wins
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Registration,
        &[
            "register",
            "registration",
            "sign up",
            "signup",
            "sign-up",
            "onboard",
            "create an account",
            "create account",
            "enrol",
            "get started",
        ],
    ),
    (
        Category::Pricing,
        &[
            "price",
            "pricing",
            "cost",
            "fees",
            "trial",
            "subscription",
            "billing",
            "quote",
        ],
    ),
    (
        Category::Therapy,
        &[
            "therapy",
            "therapies",
            "panchakarma",
            "procedure",
            "detox",
            "vamana",
            "virechana",
            "basti",
            "nasya",
            "raktamokshana",
            "abhyanga",
        ],
    ),
    (
        Category::Features,
        &[
            "feature",
            "module",
            "capabilit",
            "what can",
            "what does",
            "dashboard",
            "report",
            "integration",
        ],
    ),
    (
        Category::Support,
        &[
            "support",
            "help",
            "contact",
            "email",
            "phone",
            "issue",
            "problem",
        ],
    ),
];

impl Category {
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(*k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::General)
    }

    fn statements(self) -> &'static [&'static str] {
        match self {
            Category::Registration => &[
                "Click \"Get Started\" on the AyurSutra home page and choose whether you are a clinic, practitioner or patient.",
                "Enter your name, email and phone number, then verify the one-time code we send you.",
                "Clinics add their centre details, practitioners and therapy rooms during onboarding.",
                "Patients can be registered by the clinic or can sign up themselves and link to their centre.",
            ],
            Category::Pricing => &[
                "AyurSutra offers plans for individual practitioners, single clinics and multi-centre groups.",
                "Every plan starts with a free trial so you can try scheduling and patient records first.",
                "Pricing scales with the number of practitioners and centres you manage.",
                "Contact our team for a tailored quote or volume discounts.",
            ],
            Category::Therapy => &[
                "AyurSutra supports all five Panchakarma procedures: Vamana, Virechana, Basti, Nasya and Raktamokshana.",
                "Therapy plans include purva karma (preparation) and paschat karma (post-therapy care) steps.",
                "Sessions are scheduled automatically around practitioner, room and patient availability.",
                "Patients receive pre- and post-procedure instructions and reminders for each detox stage.",
            ],
            Category::Features => &[
                "Automated therapy scheduling with conflict-free room and practitioner allocation.",
                "Digital patient records with Prakriti assessment and treatment history.",
                "Notifications for upcoming sessions and pre/post-procedure precautions.",
                "Progress tracking, patient feedback and reports for clinics.",
            ],
            Category::Support => &[
                "You can reach the AyurSutra support team from the Help section inside the app.",
                "Email us with your clinic name and a short description of the issue.",
                "Our team typically responds within one business day.",
                "For onboarding help, ask for a guided walkthrough with a product specialist.",
            ],
            Category::General => &[
                "I can answer questions about AyurSutra, Ayurveda and Panchakarma.",
                "Try asking about registration, pricing, therapies or product features.",
                "For anything else, please contact the AyurSutra support team.",
            ],
        }
    }
}

pub fn bullets(statements: &[&str]) -> String {
    statements
        .iter()
        .map(|s| format!("• {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn offline_answer(message: &str) -> String {
    bullets(Category::classify(message).statements())
}
