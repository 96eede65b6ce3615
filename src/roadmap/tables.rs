//! Static learning-plan data: typical study durations, role core-skill
//! profiles, and curated resources. Keys are lowercase.

/// Typical weeks of study to reach working proficiency.
pub(super) static SKILL_DURATIONS: &[(&str, u32)] = &[
    ("python", 4),
    ("java", 6),
    ("javascript", 4),
    ("sql", 3),
    ("r", 4),
    ("tensorflow", 3),
    ("pytorch", 3),
    ("scikit-learn", 2),
    ("keras", 2),
    ("aws", 4),
    ("azure", 4),
    ("gcp", 4),
    ("google cloud platform", 4),
    ("docker", 2),
    ("kubernetes", 3),
    ("git", 1),
    ("jenkins", 2),
    ("mongodb", 2),
    ("postgresql", 2),
    ("mysql", 2),
    ("redis", 2),
    ("react", 3),
    ("angular", 4),
    ("django", 3),
    ("flask", 2),
    ("fastapi", 2),
    ("pandas", 2),
    ("numpy", 2),
    ("tableau", 3),
    ("power bi", 3),
    ("machine learning", 6),
    ("deep learning", 8),
    ("natural language processing", 6),
    ("computer vision", 6),
    ("mlops", 4),
];

pub(super) const DEFAULT_DURATION_WEEKS: u32 = 4;

/// Core skills per role family, in priority order. Matched by substring
/// against the lowercased job title.
pub(super) static ROLE_CORE_SKILLS: &[(&str, &[&str])] = &[
    ("data scientist", &["python", "machine learning", "sql", "statistics"]),
    ("ml engineer", &["python", "tensorflow", "pytorch", "docker", "mlops"]),
    ("data analyst", &["sql", "excel", "tableau", "python"]),
    ("data engineer", &["python", "sql", "spark", "aws", "airflow"]),
    ("software engineer", &["python", "java", "git", "sql"]),
    ("frontend developer", &["javascript", "react", "css", "html"]),
    ("backend developer", &["python", "java", "sql", "api", "docker"]),
    ("devops engineer", &["docker", "kubernetes", "aws", "jenkins", "terraform"]),
];

pub(super) struct ResourceSet {
    pub beginner: &'static [&'static str],
    pub intermediate: &'static [&'static str],
    pub advanced: &'static [&'static str],
}

/// Hand-picked resources for the most commonly missing skills.
pub(super) static SKILL_RESOURCES: &[(&str, ResourceSet)] = &[
    (
        "python",
        ResourceSet {
            beginner: &[
                "Python for Everybody (Coursera)",
                "Automate the Boring Stuff with Python (book)",
            ],
            intermediate: &[
                "Python Crash Course (book)",
                "Real Python tutorials (realpython.com)",
            ],
            advanced: &["Fluent Python (book)", "Python Cookbook (book)"],
        },
    ),
    (
        "machine learning",
        ResourceSet {
            beginner: &[
                "Machine Learning by Andrew Ng (Coursera)",
                "Introduction to Statistical Learning (book)",
            ],
            intermediate: &[
                "Hands-On Machine Learning with Scikit-Learn and TensorFlow (book)",
                "Kaggle Learn courses",
            ],
            advanced: &[
                "Pattern Recognition and Machine Learning (book)",
                "Advanced ML Specialization (Coursera)",
            ],
        },
    ),
    (
        "tensorflow",
        ResourceSet {
            beginner: &[
                "TensorFlow official tutorials (tensorflow.org)",
                "DeepLearning.AI TensorFlow Developer (Coursera)",
            ],
            intermediate: &["TensorFlow in Practice specialization"],
            advanced: &["TensorFlow Advanced Techniques (Coursera)"],
        },
    ),
    (
        "aws",
        ResourceSet {
            beginner: &[
                "AWS Cloud Practitioner Essentials",
                "AWS free tier hands-on labs",
            ],
            intermediate: &["AWS Solutions Architect Associate prep"],
            advanced: &["AWS Solutions Architect Professional prep"],
        },
    ),
    (
        "docker",
        ResourceSet {
            beginner: &["Docker getting started guide (docs.docker.com)"],
            intermediate: &["Docker Deep Dive (book)"],
            advanced: &["Docker in production patterns (docs.docker.com)"],
        },
    ),
];
