//! Built-in word lists used when no override file is configured.

/// Canonical skill phrases matched by the vocabulary strategy.
pub const DEFAULT_SKILLS: &[&str] = &[
    "graphic design",
    "visual imagination",
    "typography",
    "digital illustration",
    "design software",
    "communication",
    "ui ux design",
];

pub const DEFAULT_EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "bachelor",
    "master",
    "masters",
    "mba",
    "phd",
];

/// Lines that may open the skills section. Compared against the last word of a heading line.
pub const SKILLS_HEADINGS: &[&str] = &["skill", "skills"];

/// Headings that close the skills section. A line must equal one of these exactly.
pub const FOLLOWING_SECTION_HEADINGS: &[&str] =
    &["education", "experience", "work", "work experience", "projects"];

/// Slash-joined compound terms rewritten so phrase matching sees one form.
pub const CANONICAL_REWRITES: &[(&str, &str)] = &[("ui/ux", "ui ux"), ("ci/cd", "ci cd")];

/// English stopwords (NLTK corpus list).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
    "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve",
    "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
    "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Irregular plurals the suffix rules would get wrong.
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

/// Words ending in `s` that are already their own base form.
pub const INVARIANT_NOUNS: &[&str] = &[
    "analytics",
    "physics",
    "mathematics",
    "economics",
    "electronics",
    "graphics",
    "linguistics",
    "logistics",
    "robotics",
    "news",
    "series",
    "species",
    "kubernetes",
    "windows",
    "aws",
    "sass",
    "ios",
];
