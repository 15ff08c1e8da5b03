//! Quote catalog and relevance-ranked selection

use super::models::{PersonalizedContent, Quote, QuoteCategory};
use crate::behavior::UserBehavior;

const BASE_RELEVANCE: f64 = 0.5;

/// Mood patterns inspected for negative moods
const RECENT_PATTERN_WINDOW: usize = 5;

pub const QUOTES: [Quote; 8] = [
    Quote {
        text: "You don't have to control your thoughts. You just have to stop letting them control you.",
        author: "Dan Millman",
        category: QuoteCategory::Resilience,
    },
    Quote {
        text: "The present moment is filled with joy and happiness. If you are attentive, you will see it.",
        author: "Thich Nhat Hanh",
        category: QuoteCategory::Mindfulness,
    },
    Quote {
        text: "You are braver than you believe, stronger than you seem, and smarter than you think.",
        author: "A. A. Milne",
        category: QuoteCategory::Motivation,
    },
    Quote {
        text: "Almost everything will work again if you unplug it for a few minutes, including you.",
        author: "Anne Lamott",
        category: QuoteCategory::SelfCare,
    },
    Quote {
        text: "Feelings come and go like clouds in a windy sky. Conscious breathing is my anchor.",
        author: "Thich Nhat Hanh",
        category: QuoteCategory::Mindfulness,
    },
    Quote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
        category: QuoteCategory::Motivation,
    },
    Quote {
        text: "Gratitude turns what we have into enough.",
        author: "Anonymous",
        category: QuoteCategory::Gratitude,
    },
    Quote {
        text: "Rock bottom became the solid foundation on which I rebuilt my life.",
        author: "J. K. Rowling",
        category: QuoteCategory::Resilience,
    },
];

/// Relevance of a quote for the given behavior, within 0.0 - 1.0
pub fn quote_relevance(quote: &Quote, behavior: &UserBehavior) -> f64 {
    let mut score = BASE_RELEVANCE;

    if behavior.has_used("mindfulness") && quote.category == QuoteCategory::Mindfulness {
        score += 0.3;
    }
    if behavior.has_used("mood") && quote.category == QuoteCategory::Motivation {
        score += 0.2;
    }
    if behavior.recent_negative_moods(RECENT_PATTERN_WINDOW) > 0
        && quote.category == QuoteCategory::Motivation
    {
        score += 0.4;
    }

    score.clamp(0.0, 1.0)
}

/// Pick the most relevant quote; the earliest catalog entry wins ties
pub fn select_quote(behavior: Option<&UserBehavior>) -> PersonalizedContent {
    let Some(behavior) = behavior else {
        return content(&QUOTES[0], BASE_RELEVANCE);
    };

    let mut best = &QUOTES[0];
    let mut best_score = quote_relevance(best, behavior);
    for quote in QUOTES.iter().skip(1) {
        let score = quote_relevance(quote, behavior);
        if score > best_score {
            best = quote;
            best_score = score;
        }
    }

    content(best, best_score)
}

fn content(quote: &Quote, relevance_score: f64) -> PersonalizedContent {
    PersonalizedContent {
        quote: quote.text.to_string(),
        author: quote.author.to_string(),
        category: quote.category,
        relevance_score,
    }
}
