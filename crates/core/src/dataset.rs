//! Builtin Oshikwanyama word list and language facts.
//!
//! Word list compiled by Vaskez (Mbongue Lucas Shuukifeni).

use crate::types::{Category, Category::*, Difficulty, Difficulty::*, VocabularyEntry};

type Row = (&'static str, &'static str, &'static str, Category, Difficulty);

/// `(id, english, oshikwanyama, category, difficulty)`, grouped by category.
const BUILTIN_ROWS: &[Row] = &[
    ("g1", "Hello / How are you?", "Ongeipi", Greetings, Easy),
    ("g2", "Good morning", "Walelepo", Greetings, Easy),
    ("g3", "Good afternoon", "Wauhalapo", Greetings, Easy),
    ("g4", "Good evening", "Watokelwapo", Greetings, Easy),
    ("g5", "Hi / Fine!", "Nawa", Greetings, Easy),
    ("g6", "What is your name?", "Edina loye?", Greetings, Medium),
    ("g7", "My name is...", "Edina lange aame...", Greetings, Medium),
    ("g8", "See you tomorrow!", "Otuliweteni mongula!", Greetings, Medium),
    ("p1", "I", "Ame", Pronouns, Easy),
    ("p2", "You", "Ove", Pronouns, Easy),
    ("p3", "He/She/It", "Ye", Pronouns, Easy),
    ("p4", "We", "Fyee", Pronouns, Easy),
    ("p5", "They", "Voo", Pronouns, Easy),
    ("p6", "Who", "Lyelye", Pronouns, Medium),
    ("p7", "What", "Oshike", Pronouns, Medium),
    ("p8", "This", "Eshi", Pronouns, Medium),
    ("p9", "That", "Shinya", Pronouns, Medium),
    ("v1", "To eat", "Lya", Verbs, Easy),
    ("v2", "To sleep", "Kofa", Verbs, Easy),
    ("v3", "To come", "Ila", Verbs, Easy),
    ("v4", "To go", "Inda", Verbs, Easy),
    ("v5", "To sing", "Imba", Verbs, Easy),
    ("v6", "To laugh", "Yola", Verbs, Easy),
    ("v7", "To write", "Shanga", Verbs, Medium),
    ("v8", "To speak", "Popya", Verbs, Medium),
    ("v9", "To see", "Tala", Verbs, Medium),
    ("v10", "To cry", "Kwena", Verbs, Medium),
    ("v11", "To swim", "Yowa", Verbs, Medium),
    ("n1", "One", "Imwe", Numbers, Easy),
    ("n2", "Two", "Mbali", Numbers, Easy),
    ("n3", "Three", "Nhatu", Numbers, Easy),
    ("n4", "Four", "Nhee", Numbers, Easy),
    ("n5", "Five", "Nhano", Numbers, Easy),
    ("n6", "Six", "Hamano", Numbers, Medium),
    ("n7", "Seven", "Heyali", Numbers, Medium),
    ("n8", "Eight", "Hetatu", Numbers, Medium),
    ("n9", "Nine", "Omuwoi", Numbers, Medium),
    ("n10", "Ten", "Omulongo", Numbers, Medium),
    ("n11", "Hundred", "Efele", Numbers, Hard),
    ("n12", "Thousand", "Eyovi", Numbers, Hard),
    ("f1", "Father", "Tate", Family, Easy),
    ("f2", "Mother", "Meme", Family, Easy),
    ("f3", "Son", "Monamati", Family, Medium),
    ("f4", "Daughter", "Monakadona", Family, Medium),
    ("f5", "Grandfather", "Tate Kulu", Family, Medium),
    ("f6", "Grandmother", "Meme Kulu", Family, Medium),
    ("f7", "Baby", "Okahanana", Family, Easy),
    ("f8", "Child", "Okaana", Family, Easy),
    ("f9", "Husband", "Omusamane", Family, Medium),
    ("f10", "Wife", "Omukulukadi", Family, Medium),
    ("b1", "Head", "Omutwe", Body, Easy),
    ("b2", "Hand", "Okuoko", Body, Easy),
    ("b3", "Ear", "Okutwi", Body, Easy),
    ("b4", "Mouth", "Okanya", Body, Easy),
    ("b5", "Neck", "Ofingo", Body, Medium),
    ("b6", "Stomach", "Edimo", Body, Medium),
    ("b7", "Heart", "Omutima", Body, Easy),
    ("b8", "Leg", "Okulu", Body, Easy),
    ("b9", "Tongue", "Elaka", Body, Medium),
    ("b10", "Eye", "Eiso", Body, Easy),
    ("a1", "Cow", "Ngobe", Animals, Easy),
    ("a2", "Goat", "Shikombo", Animals, Easy),
    ("a3", "Chicken", "Xuxa", Animals, Easy),
    ("a4", "Dog", "Mbwa", Animals, Easy),
    ("a5", "Cat", "Mbishi", Animals, Easy),
    ("a6", "Lion", "Nghoshi", Animals, Medium),
    ("a7", "Elephant", "Ndjaba", Animals, Medium),
    ("a8", "Giraffe", "Nduli", Animals, Medium),
    ("a9", "Zebra", "Ngolo", Animals, Medium),
    ("a10", "Snake", "Eyoka", Animals, Medium),
    ("na1", "Sun", "Etango", Nature, Easy),
    ("na2", "Moon", "Omwedhi", Nature, Easy),
    ("na3", "Water", "Omeva", Nature, Easy),
    ("na4", "Stars", "Eenyofi", Nature, Easy),
    ("na5", "Earth", "Edu", Nature, Easy),
    ("na6", "Sky", "Eulu", Nature, Easy),
    ("na7", "Rain", "Odula", Nature, Medium),
    ("na8", "River", "Omilonga", Nature, Medium),
    ("na9", "Sea", "Efuta", Nature, Medium),
    ("na10", "Fish", "Ooshi", Nature, Easy),
    ("d1", "Sunday", "Oshondaxa", Days, Medium),
    ("d2", "Monday", "Omandaxa", Days, Medium),
    ("d3", "Tuesday", "Etivali", Days, Medium),
    ("d4", "Wednesday", "Etitatu", Days, Medium),
    ("d5", "Thursday", "Etine", Days, Medium),
    ("d6", "Friday", "Etitano", Days, Medium),
    ("d7", "Saturday", "Olomakaya", Days, Medium),
    ("fo1", "Food", "Oikulya", Food, Easy),
    ("fo2", "Salt", "Omongwa", Food, Easy),
    ("fo3", "Sugar", "Osuuka", Food, Easy),
    ("fo4", "Bread", "Omboloto", Food, Easy),
    ("fo5", "Meat", "Ombelela", Food, Easy),
    ("fo6", "Beans", "Omakunde", Food, Medium),
    ("fo7", "Watermelon", "Enuwa", Food, Medium),
    ("fo8", "Banana", "Ebanana", Food, Easy),
    ("fo9", "Orange", "Elemuna", Food, Medium),
    ("ad1", "Fast", "Diva", Adverbs, Easy),
    ("ad2", "Today", "Nena", Adverbs, Easy),
    ("ad3", "Yesterday", "Onghela", Adverbs, Medium),
    ("ad4", "Tomorrow", "Mongula", Adverbs, Easy),
    ("ad5", "Behind", "Konima", Adverbs, Medium),
    ("ad6", "Down", "Pedu", Adverbs, Easy),
    ("ad7", "Above", "Pombada", Adverbs, Medium),
    ("q1", "Where?", "Peni?", Questions, Easy),
    ("q2", "Why?", "Omolwashike?", Questions, Medium),
    ("q3", "When?", "Neini?", Questions, Medium),
    ("q4", "How?", "Ngahelipi?", Questions, Medium),
    ("q5", "How are you?", "Ouli ngahelipi?", Questions, Easy),
];

/// Materialize the builtin table.
pub fn builtin_entries() -> Vec<VocabularyEntry> {
    BUILTIN_ROWS
        .iter()
        .map(|&(id, en, oshi, cat, diff)| VocabularyEntry::new(id, en, oshi, cat, diff))
        .collect()
}

/// Background shown on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub speakers: &'static str,
    pub regions: &'static [&'static str],
    pub description: &'static str,
    pub history: &'static str,
    pub fun_facts: &'static [&'static str],
}

pub const OSHIKWANYAMA: LanguageInfo = LanguageInfo {
    id: "oshikwanyama",
    name: "Oshikwanyama",
    native_name: "Oshiwambo",
    speakers: "Approximately 1+ million speakers",
    regions: &["Cunene", "Ohangwena", "Omusati", "Oshikoto", "Oshana"],
    description: "Oshikwanyama (also called Oshiwambo) is a Bantu language belonging to the \
        larger Niger-Congo Phylum. It is spoken in both Namibia and Angola, making it a truly \
        cross-border language that unites communities across national boundaries.",
    history: "The Owambo people have a rich cultural heritage spanning centuries. Oshiwambo \
        has evolved while maintaining its core structure, incorporating some loanwords from \
        colonial languages while preserving its grammatical integrity. The language is read as \
        it is written, which makes it relatively accessible for learners who master the \
        phonetic system.",
    fun_facts: &[
        "Oshiwambo is one of the most widely spoken languages in Namibia",
        "The language has unique letters like NG, NGH, SH, and NY",
        "Unlike English, Oshiwambo is phonetic: words are pronounced as written",
        "The Owambo people are known for their rich cultural traditions and hospitality",
    ],
};

/// Look up a language by navigation id. Only Oshikwanyama ships today.
pub fn language_info(id: &str) -> Option<&'static LanguageInfo> {
    if id.eq_ignore_ascii_case(OSHIKWANYAMA.id) {
        Some(&OSHIKWANYAMA)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let entries = builtin_entries();
        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
        assert_eq!(entries.len(), 108);
    }

    #[test]
    fn builtin_covers_every_category() {
        let entries = builtin_entries();
        for cat in Category::ALL {
            assert!(
                entries.iter().any(|e| e.category == cat),
                "no entries for {:?}",
                cat
            );
        }
    }

    #[test]
    fn builtin_texts_are_unique_per_side() {
        let entries = builtin_entries();
        let sources: HashSet<&str> = entries.iter().map(|e| e.source_text.as_str()).collect();
        let targets: HashSet<&str> = entries.iter().map(|e| e.target_text.as_str()).collect();
        assert_eq!(sources.len(), entries.len());
        assert_eq!(targets.len(), entries.len());
    }

    #[test]
    fn language_lookup_is_case_insensitive() {
        assert!(language_info("Oshikwanyama").is_some());
        assert!(language_info("klingon").is_none());
    }
}
