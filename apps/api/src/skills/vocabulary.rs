//! Closed skill vocabulary and the static course table.
//!
//! Both are process-wide constants. Labels are canonical lowercase.

/// Every skill label the extractors can report.
pub const SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "c#",
    "javascript",
    "react",
    "vue",
    "angular",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "nlp",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "data analysis",
    "pandas",
    "numpy",
    "spark",
    "excel",
    "communication",
    "problem solving",
    "rest api",
    "api development",
];

/// Skill label -> suggested courses, in display order.
pub const COURSE_TABLE: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "Complete Python Bootcamp (Udemy)",
            "Python for Everybody (Coursera)",
        ],
    ),
    (
        "nlp",
        &[
            "Natural Language Processing with Deep Learning (Coursera)",
            "spaCy 101 (spaCy.io)",
        ],
    ),
    (
        "react",
        &[
            "React - The Complete Guide (Udemy)",
            "Front-End Web Development (Coursera)",
        ],
    ),
    ("docker", &["Docker Mastery (Udemy)"]),
    ("aws", &["AWS Certified Cloud Practitioner (A Cloud Guru)"]),
];
