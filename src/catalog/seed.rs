//! Built-in sample catalog.
//!
//! These are hardcoded sample records, not sourced from a live system. Stored
//! category `tool_count` values are deliberately left at zero; counts are
//! always derived from the tool list.

use crate::catalog::types::{
    CategoryRecord, Complexity, Performance, Popularity, ToolKind, ToolRecord, ToolStatus,
};

struct AiSeed {
    id: &'static str,
    name: &'static str,
    company: &'static str,
    category: &'static str,
    description: &'static str,
    pricing: &'static str,
    tags: &'static [&'static str],
    trending: f64,
    user_count: &'static str,
    release_date: &'static str,
    last_updated: &'static str,
    free_trial: bool,
    performance: Option<(f64, f64, f64)>,
}

struct WebDevSeed {
    id: &'static str,
    name: &'static str,
    creator: &'static str,
    category: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    trending: f64,
    github_stars: u64,
    last_updated: &'static str,
    difficulty: Complexity,
}

const AI_TOOLS: &[AiSeed] = &[
    AiSeed {
        id: "gpt-4",
        name: "GPT-4",
        company: "OpenAI",
        category: "Large Language Models",
        description: "Large multimodal language model for text and image understanding.",
        pricing: "Pay-per-use",
        tags: &["LLM", "Multimodal", "Reasoning", "Chat"],
        trending: 98.0,
        user_count: "100M+",
        release_date: "2023-03-14",
        last_updated: "2025-09-05",
        free_trial: true,
        performance: Some((95.0, 85.0, 99.0)),
    },
    AiSeed {
        id: "claude-3-5-sonnet",
        name: "Claude 3.5 Sonnet",
        company: "Anthropic",
        category: "Large Language Models",
        description: "Conversational model focused on careful reasoning and long documents.",
        pricing: "Freemium",
        tags: &["LLM", "Reasoning", "Long Context", "Chat"],
        trending: 89.0,
        user_count: "50M+",
        release_date: "2024-06-20",
        last_updated: "2025-09-04",
        free_trial: true,
        performance: Some((94.0, 88.0, 98.0)),
    },
    AiSeed {
        id: "github-copilot",
        name: "GitHub Copilot",
        company: "GitHub",
        category: "Code Generation",
        description: "Pair programmer that suggests code and whole functions inside the editor.",
        pricing: "$10/month",
        tags: &["Code Generation", "IDE Integration", "Autocomplete"],
        trending: 92.0,
        user_count: "10M+",
        release_date: "2021-06-29",
        last_updated: "2025-09-03",
        free_trial: true,
        performance: Some((88.0, 95.0, 97.0)),
    },
    AiSeed {
        id: "gemini-pro",
        name: "Gemini Pro",
        company: "Google",
        category: "Large Language Models",
        description: "Multimodal model family integrated across Google products.",
        pricing: "Freemium",
        tags: &["LLM", "Multimodal", "Search"],
        trending: 85.0,
        user_count: "80M+",
        release_date: "2023-12-06",
        last_updated: "2025-09-02",
        free_trial: true,
        performance: Some((92.0, 90.0, 97.0)),
    },
    AiSeed {
        id: "canva-magic-studio",
        name: "Canva Magic Studio",
        company: "Canva",
        category: "Design Tools",
        description: "Generative design features for layouts, images and brand kits.",
        pricing: "Freemium",
        tags: &["Graphic Design", "Templates", "Branding"],
        trending: 78.0,
        user_count: "60M+",
        release_date: "2023-10-04",
        last_updated: "2025-09-01",
        free_trial: false,
        performance: None,
    },
    AiSeed {
        id: "autogpt",
        name: "AutoGPT",
        company: "Significant Gravitas",
        category: "Agent Frameworks",
        description: "Open-source framework for autonomous goal-driven agents.",
        pricing: "Free (open source)",
        tags: &["Agents", "Automation", "Open Source"],
        trending: 72.0,
        user_count: "5M+",
        release_date: "2023-03-30",
        last_updated: "2025-08-30",
        free_trial: false,
        performance: None,
    },
    AiSeed {
        id: "midjourney",
        name: "Midjourney",
        company: "Midjourney Inc.",
        category: "Image Generation",
        description: "Text-to-image generator known for stylized artwork.",
        pricing: "$10-$120/month",
        tags: &["Text-to-Image", "Art Creation"],
        trending: 92.0,
        user_count: "15M+",
        release_date: "2022-07-12",
        last_updated: "2025-09-05",
        free_trial: false,
        performance: Some((90.0, 80.0, 95.0)),
    },
    AiSeed {
        id: "notion-ai",
        name: "Notion AI",
        company: "Notion Labs",
        category: "Writing Assistants",
        description: "Writing and summarization assistant built into Notion workspaces.",
        pricing: "$10/month add-on",
        tags: &["Writing", "Summarization", "Productivity"],
        trending: 85.0,
        user_count: "30M+",
        release_date: "2023-02-22",
        last_updated: "2025-09-04",
        free_trial: true,
        performance: None,
    },
    AiSeed {
        id: "runway-ml",
        name: "Runway",
        company: "Runway",
        category: "Video Generation",
        description: "Creative suite for generating and editing video with AI.",
        pricing: "Freemium",
        tags: &["Video Editing", "Text-to-Video"],
        trending: 88.0,
        user_count: "8M+",
        release_date: "2018-12-01",
        last_updated: "2025-09-03",
        free_trial: true,
        performance: None,
    },
    AiSeed {
        id: "elevenlabs",
        name: "ElevenLabs",
        company: "ElevenLabs",
        category: "Voice & Audio",
        description: "Realistic speech synthesis and voice cloning.",
        pricing: "Freemium",
        tags: &["Speech Synthesis", "Voice Cloning"],
        trending: 90.0,
        user_count: "5M+",
        release_date: "2022-01-01",
        last_updated: "2025-09-05",
        free_trial: true,
        performance: Some((96.0, 92.0, 98.0)),
    },
    AiSeed {
        id: "stable-diffusion",
        name: "Stable Diffusion",
        company: "Stability AI",
        category: "Image Generation",
        description: "Open image diffusion model that runs locally or in the cloud.",
        pricing: "Free (open source)",
        tags: &["Text-to-Image", "Open Source", "Style Transfer"],
        trending: 95.0,
        user_count: "25M+",
        release_date: "2022-08-22",
        last_updated: "2025-09-02",
        free_trial: false,
        performance: None,
    },
    AiSeed {
        id: "google-veo-3",
        name: "Veo 3",
        company: "Google",
        category: "Video Generation",
        description: "Text-to-video model with synchronized audio generation.",
        pricing: "Subscription",
        tags: &["Text-to-Video", "Audio"],
        trending: 95.0,
        user_count: "2M+",
        release_date: "2025-05-20",
        last_updated: "2025-09-18",
        free_trial: false,
        performance: None,
    },
    AiSeed {
        id: "bytedance-seed",
        name: "Seedance",
        company: "ByteDance",
        category: "Video Generation",
        description: "Multi-shot video generation from text and images.",
        pricing: "Pay-per-use",
        tags: &["Text-to-Video", "Image-to-Video"],
        trending: 78.0,
        user_count: "500K+",
        release_date: "2025-06-11",
        last_updated: "2025-09-15",
        free_trial: false,
        performance: None,
    },
    AiSeed {
        id: "perplexity-ai",
        name: "Perplexity",
        company: "Perplexity",
        category: "Research Tools",
        description: "Answer engine that cites its sources.",
        pricing: "Freemium",
        tags: &["Search", "Research", "Citations"],
        trending: 87.0,
        user_count: "20M+",
        release_date: "2022-12-07",
        last_updated: "2025-09-15",
        free_trial: true,
        performance: None,
    },
    AiSeed {
        id: "deepseek-v3",
        name: "DeepSeek V3",
        company: "DeepSeek",
        category: "Large Language Models",
        description: "Open-weight mixture-of-experts language model.",
        pricing: "Free",
        tags: &["LLM", "Open Source", "Reasoning"],
        trending: 89.0,
        user_count: "2M+",
        release_date: "2024-12-26",
        last_updated: "2025-09-15",
        free_trial: false,
        performance: None,
    },
    AiSeed {
        id: "manus-prime-x",
        name: "Manus",
        company: "Manus",
        category: "Specialized Tools",
        description: "General-purpose agent that executes multi-step tasks.",
        pricing: "Invite only",
        tags: &["Agents", "Automation"],
        trending: 75.0,
        user_count: "50K+",
        release_date: "2025-03-06",
        last_updated: "2025-09-01",
        free_trial: false,
        performance: None,
    },
];

const WEB_DEV_TOOLS: &[WebDevSeed] = &[
    WebDevSeed {
        id: "react",
        name: "React",
        creator: "Facebook (Meta)",
        category: "Frontend Frameworks",
        description: "Component-based library for building user interfaces.",
        tags: &["javascript", "ui", "components"],
        trending: 95.0,
        github_stars: 225_000,
        last_updated: "2024-09-05",
        difficulty: Complexity::Intermediate,
    },
    WebDevSeed {
        id: "nextjs",
        name: "Next.js",
        creator: "Vercel",
        category: "Frontend Frameworks",
        description: "React framework with server rendering and file-based routing.",
        tags: &["react", "ssr", "fullstack"],
        trending: 92.0,
        github_stars: 120_000,
        last_updated: "2024-09-05",
        difficulty: Complexity::Intermediate,
    },
    WebDevSeed {
        id: "vscode",
        name: "Visual Studio Code",
        creator: "Microsoft",
        category: "Code Editors & IDEs",
        description: "Extensible source code editor.",
        tags: &["editor", "ide", "extensions"],
        trending: 98.0,
        github_stars: 160_000,
        last_updated: "2024-09-05",
        difficulty: Complexity::Beginner,
    },
    WebDevSeed {
        id: "git",
        name: "Git",
        creator: "Linus Torvalds",
        category: "Version Control",
        description: "Distributed version control system.",
        tags: &["vcs", "cli", "collaboration"],
        trending: 85.0,
        github_stars: 50_000,
        last_updated: "2024-09-05",
        difficulty: Complexity::Intermediate,
    },
    WebDevSeed {
        id: "vue",
        name: "Vue.js",
        creator: "Evan You",
        category: "Frontend Frameworks",
        description: "Progressive framework for building web interfaces.",
        tags: &["javascript", "ui", "reactive"],
        trending: 88.0,
        github_stars: 207_000,
        last_updated: "2024-09-04",
        difficulty: Complexity::Beginner,
    },
];

struct CategorySeed {
    name: &'static str,
    description: &'static str,
    popularity: f64,
    growth: f64,
    complexity: Complexity,
    tags: &'static [&'static str],
    featured: bool,
}

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Large Language Models",
        description: "Models that understand and generate human-like text.",
        popularity: 95.0,
        growth: 45.0,
        complexity: Complexity::Mixed,
        tags: &["Text Generation", "Conversation", "Reasoning", "Multimodal"],
        featured: true,
    },
    CategorySeed {
        name: "Code Generation",
        description: "Assistants that write, review and explain code.",
        popularity: 88.0,
        growth: 67.0,
        complexity: Complexity::Beginner,
        tags: &["Programming", "Debugging", "Code Review", "IDE Integration"],
        featured: true,
    },
    CategorySeed {
        name: "Design Tools",
        description: "Generative tools for graphics, layouts and brand assets.",
        popularity: 82.0,
        growth: 52.0,
        complexity: Complexity::Beginner,
        tags: &["Graphic Design", "UI/UX", "Branding", "Templates"],
        featured: true,
    },
    CategorySeed {
        name: "Agent Frameworks",
        description: "Frameworks for autonomous, tool-using agents.",
        popularity: 72.0,
        growth: 89.0,
        complexity: Complexity::Advanced,
        tags: &["Automation", "Planning", "Execution", "Autonomy"],
        featured: true,
    },
    CategorySeed {
        name: "Image Generation",
        description: "Text-to-image and image editing models.",
        popularity: 84.0,
        growth: 73.0,
        complexity: Complexity::Intermediate,
        tags: &["Text-to-Image", "Art Creation", "Photo Editing", "Style Transfer"],
        featured: true,
    },
    CategorySeed {
        name: "Voice & Audio",
        description: "Speech synthesis, cloning and audio processing.",
        popularity: 68.0,
        growth: 56.0,
        complexity: Complexity::Intermediate,
        tags: &["Speech Synthesis", "Voice Cloning", "Audio Processing", "Music Generation"],
        featured: false,
    },
    CategorySeed {
        name: "Video Generation",
        description: "Models that generate and edit video.",
        popularity: 80.0,
        growth: 95.0,
        complexity: Complexity::Intermediate,
        tags: &["Text-to-Video", "Video Editing"],
        featured: true,
    },
    CategorySeed {
        name: "Writing Assistants",
        description: "Drafting, editing and summarization help.",
        popularity: 78.0,
        growth: 35.0,
        complexity: Complexity::Beginner,
        tags: &["Writing", "Summarization", "Grammar"],
        featured: false,
    },
    CategorySeed {
        name: "Research Tools",
        description: "Search and literature tools that cite sources.",
        popularity: 74.0,
        growth: 61.0,
        complexity: Complexity::Intermediate,
        tags: &["Search", "Citations", "Analysis"],
        featured: false,
    },
    CategorySeed {
        name: "Data Analysis",
        description: "Analytics, visualization and machine learning platforms.",
        popularity: 74.0,
        growth: 42.0,
        complexity: Complexity::Advanced,
        tags: &["Analytics", "Visualization", "Machine Learning", "Business Intelligence"],
        featured: false,
    },
    CategorySeed {
        name: "Frontend Frameworks",
        description: "Libraries and frameworks for building web interfaces.",
        popularity: 90.0,
        growth: 20.0,
        complexity: Complexity::Intermediate,
        tags: &["javascript", "ui"],
        featured: false,
    },
    CategorySeed {
        name: "Code Editors & IDEs",
        description: "Editors and integrated development environments.",
        popularity: 86.0,
        growth: 15.0,
        complexity: Complexity::Beginner,
        tags: &["editor", "ide"],
        featured: false,
    },
    CategorySeed {
        name: "Version Control",
        description: "Tools for tracking and sharing source changes.",
        popularity: 83.0,
        growth: 8.0,
        complexity: Complexity::Intermediate,
        tags: &["vcs", "collaboration"],
        featured: false,
    },
];

fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

pub fn tools() -> Vec<ToolRecord> {
    let ai = AI_TOOLS.iter().map(|seed| ToolRecord {
        company: seed.company.to_string(),
        tags: owned(seed.tags),
        description: seed.description.to_string(),
        pricing: seed.pricing.to_string(),
        popularity: Popularity {
            trending_score: seed.trending,
            github_stars: None,
            weekly_downloads: None,
        },
        user_count: seed.user_count.to_string(),
        release_date: seed.release_date.to_string(),
        last_updated: seed.last_updated.to_string(),
        performance: seed
            .performance
            .map(|(accuracy, speed, reliability)| Performance {
                accuracy,
                speed,
                reliability,
            }),
        free_trial_available: seed.free_trial,
        ..ToolRecord::new(seed.id, seed.name, seed.category)
    });

    let web_dev = WEB_DEV_TOOLS.iter().map(|seed| ToolRecord {
        company: seed.creator.to_string(),
        tags: owned(seed.tags),
        description: seed.description.to_string(),
        pricing: "Free (open source)".to_string(),
        popularity: Popularity {
            trending_score: seed.trending,
            github_stars: Some(seed.github_stars),
            weekly_downloads: None,
        },
        last_updated: seed.last_updated.to_string(),
        kind: ToolKind::WebDev,
        status: ToolStatus::Stable,
        difficulty: Some(seed.difficulty),
        ..ToolRecord::new(seed.id, seed.name, seed.category)
    });

    ai.chain(web_dev).collect()
}

pub fn categories() -> Vec<CategoryRecord> {
    CATEGORIES
        .iter()
        .map(|seed| CategoryRecord {
            description: seed.description.to_string(),
            popularity: seed.popularity,
            growth: seed.growth,
            complexity: seed.complexity,
            tags: owned(seed.tags),
            featured: seed.featured,
            ..CategoryRecord::new(seed.name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let tools = tools();
        let ids: HashSet<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tools.len());

        let categories = categories();
        let names: HashSet<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), categories.len());
    }

    #[test]
    fn test_web_dev_tools_carry_difficulty() {
        for tool in tools().iter().filter(|t| t.kind == ToolKind::WebDev) {
            assert!(tool.difficulty.is_some(), "{} has no difficulty", tool.id);
            assert!(tool.popularity.github_stars.is_some());
        }
    }

    #[test]
    fn test_orphan_category_is_tolerated() {
        // "Specialized Tools" has no category record on purpose.
        let names: HashSet<_> = categories().into_iter().map(|c| c.name).collect();
        assert!(tools().iter().any(|t| !names.contains(&t.category)));
    }
}
