//! Fallback content synthesis.
//!
//! When every upstream path for a feed fails, the service substitutes
//! synthetic items so the response shape never degrades. Synthetic items
//! are deterministic for a given request: stable ids, fixed figures, and
//! `is_static: true` on every item so callers can tell them apart from
//! live data. Only the envelope timestamp varies between calls.

use chrono::{DateTime, Utc};

use crate::domain::content::{
    Article, CoinQuote, DailyForecast, Deal, JobListing, MovieSummary, Nutrition, Post, Recipe,
    Video, WeatherReport,
};
use crate::domain::vocabulary::title_case;

/// Synthetic articles for one news category.
pub fn news(category: &str) -> Vec<Article> {
    let label = title_case(category);
    let templates = [
        (
            "1",
            format!("Breaking: Major Development in {label}"),
            format!("A significant story is unfolding in the {label} space. Full coverage to follow."),
        ),
        (
            "2",
            format!("{label} Weekly Roundup"),
            format!("The stories that shaped {label} this week, in one place."),
        ),
        (
            "3",
            format!("What to Watch in {label} This Month"),
            format!("Analysts weigh in on the {label} trends worth following."),
        ),
    ];
    templates
        .into_iter()
        .map(|(suffix, title, description)| Article {
            id: format!("mock_news_{category}_{suffix}"),
            title,
            description,
            url: format!("https://example.com/news/{category}/{suffix}"),
            source: "Newswire".to_owned(),
            category: category.to_owned(),
            published_at: String::new(),
            image_url: String::new(),
            is_static: true,
        })
        .collect()
}

/// Synthetic current conditions and forecast for a city.
pub fn weather(city: &str, now: DateTime<Utc>) -> WeatherReport {
    let forecast = [
        ("Today", 24, 16, "Partly Cloudy", "02d"),
        ("Tomorrow", 26, 18, "Sunny", "01d"),
        ("Wednesday", 23, 15, "Light Rain", "10d"),
        ("Thursday", 21, 14, "Cloudy", "04d"),
        ("Friday", 25, 17, "Sunny", "01d"),
    ];
    WeatherReport {
        city: title_case(city),
        country: String::new(),
        temperature: 22,
        feels_like: 25,
        description: "Partly Cloudy".to_owned(),
        humidity: 65,
        wind_speed: 12,
        pressure: 1013,
        visibility: 10,
        icon: "02d".to_owned(),
        forecast: forecast
            .into_iter()
            .map(|(day, high, low, description, icon)| DailyForecast {
                day: day.to_owned(),
                high,
                low,
                description: description.to_owned(),
                icon: icon.to_owned(),
            })
            .collect(),
        is_mock: true,
        timestamp: now,
    }
}

/// Synthetic videos for one topic.
pub fn videos(category: &str) -> Vec<Video> {
    let label = title_case(category);
    [
        ("1", format!("{label} Explained in 10 Minutes")),
        ("2", format!("The State of {label} in 2025")),
        ("3", format!("{label} Deep Dive")),
    ]
    .into_iter()
    .map(|(suffix, title)| Video {
        id: format!("mock_video_{category}_{suffix}"),
        title,
        description: format!("An overview of recent {label} developments."),
        url: String::new(),
        thumbnail: String::new(),
        channel: "Sample Channel".to_owned(),
        category: category.to_owned(),
        published_at: String::new(),
        is_static: true,
    })
    .collect()
}

/// Synthetic discussion posts for one subreddit.
pub fn posts(subreddit: &str) -> Vec<Post> {
    [
        (
            "1",
            format!("What's everyone working on in r/{subreddit} this week?"),
            "Weekly discussion thread. Share your progress and questions.",
            847,
            293,
        ),
        (
            "2",
            format!("A beginner's guide to {subreddit}"),
            "Collected resources and advice from the community.",
            512,
            118,
        ),
        (
            "3",
            format!("The most interesting {subreddit} story I've seen this year"),
            "Long-form write-up with sources in the comments.",
            1204,
            431,
        ),
    ]
    .into_iter()
    .map(|(suffix, title, body, score, comments)| Post {
        id: format!("mock_post_{subreddit}_{suffix}"),
        title,
        description: (*body).to_owned(),
        url: format!("https://reddit.com/r/{subreddit}"),
        subreddit: subreddit.to_owned(),
        author: "community_bot".to_owned(),
        score,
        comments,
        created_at: String::new(),
        is_static: true,
    })
    .collect()
}

struct RecipeTemplate {
    title: &'static str,
    cuisine: &'static str,
    minutes: u32,
    vegetarian: bool,
    ingredients: &'static [&'static str],
}

const VEGETARIAN_TEMPLATES: [RecipeTemplate; 3] = [
    RecipeTemplate {
        title: "Vegetarian {} Curry",
        cuisine: "Indian",
        minutes: 40,
        vegetarian: true,
        ingredients: &[
            "2 cups basmati rice",
            "1 block tofu",
            "1 can coconut milk",
            "2 tbsp curry paste",
            "1 onion",
            "2 cloves garlic",
        ],
    },
    RecipeTemplate {
        title: "Mediterranean {} Bowl",
        cuisine: "Mediterranean",
        minutes: 25,
        vegetarian: true,
        ingredients: &[
            "1 cup quinoa",
            "1 cup chickpeas",
            "1 cucumber",
            "2 tomatoes",
            "100g feta cheese",
            "2 tbsp olive oil",
        ],
    },
    RecipeTemplate {
        title: "Asian {} Stir-fry",
        cuisine: "Asian",
        minutes: 20,
        vegetarian: true,
        ingredients: &[
            "200g rice noodles",
            "1 block tofu",
            "2 cups mixed vegetables",
            "3 tbsp soy sauce",
            "1 tbsp sesame oil",
            "1 tsp ginger",
        ],
    },
];

const STANDARD_TEMPLATES: [RecipeTemplate; 3] = [
    RecipeTemplate {
        title: "Grilled {} with Herbs",
        cuisine: "American",
        minutes: 35,
        vegetarian: false,
        ingredients: &[
            "500g chicken breast",
            "2 tbsp olive oil",
            "1 lemon",
            "2 sprigs rosemary",
            "salt and pepper",
        ],
    },
    RecipeTemplate {
        title: "Spicy {} Pasta",
        cuisine: "Italian",
        minutes: 30,
        vegetarian: false,
        ingredients: &[
            "400g pasta",
            "2 chicken breasts",
            "1 jar tomato sauce",
            "1 tsp chili flakes",
            "50g parmesan cheese",
        ],
    },
    RecipeTemplate {
        title: "Pan-seared {} with Sauce",
        cuisine: "International",
        minutes: 25,
        vegetarian: false,
        ingredients: &[
            "2 salmon fillets",
            "2 tbsp butter",
            "1 lemon",
            "2 cloves garlic",
            "fresh dill",
        ],
    },
];

/// Synthetic recipes built around a subject word, vegetarian variants
/// when the caller's preferences ask for them.
pub fn recipes(subject: &str, vegetarian: bool) -> Vec<Recipe> {
    let templates: &[RecipeTemplate] = if vegetarian {
        &VEGETARIAN_TEMPLATES
    } else {
        &STANDARD_TEMPLATES
    };
    let label = title_case(subject);
    templates
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let ingredients: Vec<String> =
                template.ingredients.iter().map(|&line| line.to_owned()).collect();
            Recipe {
                id: format!("mock_recipe_{}", index + 1),
                title: template.title.replace("{}", &label),
                image: String::new(),
                ready_in_minutes: template.minutes,
                servings: 4,
                cuisine: vec![template.cuisine.to_owned()],
                dietary: if template.vegetarian {
                    vec!["Vegetarian".to_owned()]
                } else {
                    Vec::new()
                },
                nutrition: template_nutrition(&ingredients),
                ingredients,
                instructions: "Combine the ingredients and cook until done. Season to taste."
                    .to_owned(),
                source_url: String::new(),
                is_static: true,
            }
        })
        .collect()
}

/// Nutrition figures for synthetic recipes; a coarser estimate than the
/// live normaliser uses, pinned by tests.
fn template_nutrition(ingredients: &[String]) -> Nutrition {
    let count = |keywords: &[&str]| {
        ingredients
            .iter()
            .filter(|line| {
                let line = line.to_lowercase();
                keywords.iter().any(|keyword| line.contains(keyword))
            })
            .count() as u32
    };
    let protein = count(&["chicken", "beef", "salmon", "tofu", "cheese", "egg"]);
    let carbs = count(&["pasta", "rice", "potato", "quinoa", "bread"]);
    Nutrition {
        calories: 300 + protein * 50 + carbs * 30,
        protein: format!("{}g", 15 + protein * 10),
        carbs: format!("{}g", 30 + carbs * 15),
        fat: format!("{}g", 12 + protein * 3),
    }
}

/// Synthetic movies for one genre label.
pub fn movies(genre: &str, language: &str) -> Vec<MovieSummary> {
    let label = title_case(genre);
    [
        ("1", format!("The {label} Chronicles"), 7.8, "2024"),
        ("2", format!("Return to {label} City"), 7.1, "2023"),
        ("3", format!("{label} Story"), 6.9, "2025"),
    ]
    .into_iter()
    .map(|(suffix, title, rating, year)| MovieSummary {
        id: format!("mock_movie_{genre}_{suffix}"),
        title,
        description: format!("A celebrated entry in the {label} genre."),
        genre: label.clone(),
        rating,
        year: year.to_owned(),
        language: language.to_owned(),
        poster_url: String::new(),
        is_static: true,
    })
    .collect()
}

/// Synthetic market quotes for the largest coins.
pub fn coins() -> Vec<CoinQuote> {
    [
        ("bitcoin", "Bitcoin", "BTC", 43_250.50, 2.34, 846_000_000_000_i64, 1_u32),
        ("ethereum", "Ethereum", "ETH", 2_650.75, -1.12, 318_000_000_000, 2),
        ("binancecoin", "BNB", "BNB", 315.20, 0.87, 48_000_000_000, 3),
    ]
    .into_iter()
    .map(|(id, name, symbol, price, change, market_cap, rank)| CoinQuote {
        id: id.to_owned(),
        name: name.to_owned(),
        symbol: symbol.to_owned(),
        price,
        change_24h: change,
        market_cap,
        volume: market_cap / 20,
        image: String::new(),
        rank,
        is_static: true,
    })
    .collect()
}

/// Synthetic job listings for one category.
pub fn jobs(category: &str) -> Vec<JobListing> {
    let label = title_case(category);
    [
        ("1", format!("Senior {label} Specialist"), "Acme Corp", "$90000 - $120000"),
        ("2", format!("{label} Analyst"), "Initech", "$60000 - $80000"),
        ("3", format!("Head of {label}"), "Globex", "Competitive"),
    ]
    .into_iter()
    .map(|(suffix, title, company, salary)| JobListing {
        id: format!("mock_job_{category}_{suffix}"),
        title,
        company: (*company).to_owned(),
        location: "Remote".to_owned(),
        contract_type: "Full-time".to_owned(),
        salary: (*salary).to_owned(),
        description: format!("An opportunity to lead {label} work with a growing team."),
        url: String::new(),
        category: category.to_owned(),
        posted_at: String::new(),
        is_static: true,
    })
    .collect()
}

/// The static deals catalogue; this feed has no live upstream.
pub fn deals() -> Vec<Deal> {
    [
        (
            "1",
            "Wireless Noise-Cancelling Headphones",
            "Over-ear headphones with 30-hour battery life.",
            "Amazon",
            "electronics",
            199.99,
            299.99,
        ),
        (
            "2",
            "Robot Vacuum Cleaner",
            "Self-charging robot vacuum with app control.",
            "Best Buy",
            "home",
            249.00,
            399.00,
        ),
        (
            "3",
            "Stainless Steel Cookware Set",
            "Ten-piece induction-ready cookware set.",
            "Target",
            "kitchen",
            89.99,
            149.99,
        ),
        (
            "4",
            "Fitness Smartwatch",
            "Heart-rate tracking, GPS, and a week of battery.",
            "Amazon",
            "fitness",
            129.99,
            179.99,
        ),
    ]
    .into_iter()
    .map(|(suffix, title, description, platform, category, price, original)| Deal {
        id: format!("deal_{suffix}"),
        title: (*title).to_owned(),
        description: (*description).to_owned(),
        url: String::new(),
        platform: (*platform).to_owned(),
        category: (*category).to_owned(),
        price,
        original_price: original,
        discount: (((original - price) / original) * 100.0).round(),
        image_url: String::new(),
        valid_until: String::new(),
        is_static: true,
    })
    .collect()
}
