use trivia_core::{Category, CategoryId, MemoryStore, Question, QuestionId};

/// Build a stored question with predictable text
#[allow(dead_code)]
pub fn question(id: QuestionId, text: &str, category: CategoryId) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {}", id),
        category,
        difficulty: 1,
    }
}

/// Store holding questions `1..=count`, all in `category`
#[allow(dead_code)]
pub fn store_with_questions(count: QuestionId, category: CategoryId) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_category(Category::new(category, "Science"));
    for id in 1..=count {
        store.insert_question_with_id(question(id, &format!("Question {}", id), category));
    }
    store
}

/// Store with the six classic categories and a spread of questions
///
/// Ids 1-4 are Science (1), 5-6 Art (2), 7-9 Geography (3), 10 History (4).
#[allow(dead_code)]
pub fn mixed_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    for (id, label) in [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ] {
        store.insert_category(Category::new(id, label));
    }
    let rows: [(QuestionId, &str, CategoryId); 10] = [
        (1, "What is the heaviest organ in the human body?", 1),
        (2, "Who discovered penicillin?", 1),
        (3, "Hematology is a branch of medicine involving the study of what?", 1),
        (4, "What is the boiling point of water in Kelvin?", 1),
        (5, "Which Dutch graphic artist drew impossible objects?", 2),
        (6, "How many paintings did Van Gogh sell in his lifetime?", 2),
        (7, "What is the largest lake in Africa?", 3),
        (8, "In which royal palace would you find the Hall of Mirrors?", 3),
        (9, "The Taj Mahal is located in which Indian city?", 3),
        (10, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", 4),
    ];
    for (id, text, category) in rows {
        store.insert_question_with_id(question(id, text, category));
    }
    store
}

#[allow(dead_code)]
pub fn ids(questions: &[Question]) -> Vec<QuestionId> {
    questions.iter().map(|q| q.id).collect()
}
