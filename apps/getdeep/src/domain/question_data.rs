//! Built-in question pools.
//!
//! Index positions are persisted as question identity: append only, never
//! reorder or remove entries.

pub const ICE_BREAKER: &[&str] = &[
    "What was the first thing you noticed about me?",
    "What is a small thing that always makes your day better?",
    "Which song would be the soundtrack of our relationship?",
    "What was your favourite childhood game?",
    "If we could travel anywhere tomorrow, where would you pick?",
    "What is the best meal we have ever shared?",
    "Which fictional couple do we most resemble?",
    "What habit of mine do you secretly find cute?",
    "What would your perfect lazy Sunday look like?",
    "What is the funniest memory we have together?",
    "Which talent would you most like to have overnight?",
    "What is something you have never told anyone because it seemed too silly?",
    "What was your first impression of my friends?",
    "Which place from your childhood would you like to show me?",
    "What is a movie you could watch over and over?",
];

pub const DEEP: &[&str] = &[
    "When do you feel most loved by me?",
    "What is a fear you rarely talk about?",
    "Which moment in our relationship made you feel closest to me?",
    "What is something you wish I asked you about more often?",
    "How has your idea of love changed since you were a teenager?",
    "What part of your past still shapes how you react today?",
    "What does a good apology look like to you?",
    "When did you last feel truly proud of yourself?",
    "What is one thing you would like us to do differently as a couple?",
    "Which of your parents' habits do you see in yourself?",
    "What do you need from me when you have had a bad day?",
    "What dream have you put on hold, and why?",
];

pub const DEEPER: &[&str] = &[
    "What is something you have never forgiven yourself for?",
    "What do you think we avoid talking about?",
    "When have you felt most alone while we were together?",
    "What would you want me to know if you could not tell me again?",
    "What is the hardest truth you have learned about yourself?",
    "Which of your insecurities do you hope I never notice?",
    "What does commitment mean to you now, honestly?",
    "What promise would you like us to make to each other tonight?",
];
