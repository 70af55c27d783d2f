//! Compiled-in lesson content.
//!
//! Only lesson 1 is authored. Every table is keyed by [`LanguageCode`] so that
//! [`ContentStore::builtin`](super::store::ContentStore::builtin) can load them
//! in one pass. Further lessons come from content packs.

use crate::types::content::PartOfSpeech;
use crate::types::language::LanguageCode::{self, Dutch, German, Italian, Spanish};

pub(crate) const LESSON_1_WORDS: &[(&str, PartOfSpeech)] = &[
    ("the", PartOfSpeech::Article),
    ("be", PartOfSpeech::Verb),
    ("to", PartOfSpeech::Preposition),
    ("of", PartOfSpeech::Preposition),
    ("and", PartOfSpeech::Conjunction),
];

/// (language, english, translation, etymology)
pub(crate) const LESSON_1_GLOSSES: &[(LanguageCode, &str, &str, &str)] = &[
    (Dutch, "the", "de/het",
        "Dutch has two articles ('de' for common gender and 'het' for neuter). Similar to English 'the' with Germanic roots."),
    (Dutch, "be", "zijn",
        "WWW: 'Be/been' in English and 'zijn' both descend from Proto-Indo-European *h₁es- (to be). Related to English 'is'."),
    (Dutch, "to", "naar/om te",
        "WWW: 'Naar' shares common Germanic origins with English 'near' for direction. 'Om te' for infinitive purpose."),
    (Dutch, "of", "van",
        "WWW: 'Van' and English 'from' share Germanic roots. Both indicate source or possession."),
    (Dutch, "and", "en",
        "WWW: 'En' evolved from Proto-Germanic *andi, related to English 'and' from the same root."),
    (German, "the", "der/die/das",
        "German uses three definite articles based on gender. From Proto-Germanic *sa (that one), related to English 'the'."),
    (German, "be", "sein",
        "WWW: 'Sein' and English 'be' both come from PIE *h₁es-, through different stems. Related to English 'is'."),
    (German, "to", "zu/nach",
        "WWW: 'Zu' relates to English 'to' through Proto-Germanic *tō. Both indicate direction or purpose."),
    (German, "of", "von",
        "WWW: 'Von' and 'of' both evolved from Proto-Germanic *af (away, off), showing the connection."),
    (German, "and", "und",
        "WWW: 'Und' and 'and' both derive from Proto-Germanic *andi, showing their common ancestry."),
    (Italian, "the", "il/la/lo",
        "Italian articles change based on gender and first letter of noun. From Latin 'ille/illa' (that)."),
    (Italian, "be", "essere",
        "WWW: 'Essere' comes from Latin 'esse' (to be), which derives from the same PIE root *h₁es- as English 'is'."),
    (Italian, "to", "a/per",
        "WWW: 'A' comes from Latin 'ad' (to, toward). 'Per' from Latin 'per' (through, by means of)."),
    (Italian, "of", "di",
        "WWW: 'Di' comes from Latin 'de' (from, concerning). Related to Old English 'of' through general possessive function."),
    (Italian, "and", "e",
        "WWW: 'E' comes from Latin 'et'. Though not directly related to 'and', both serve as basic conjunctions in Indo-European languages."),
    (Spanish, "the", "el/la",
        "Spanish articles change with gender. From Latin 'ille/illa' (that), same origin as English 'the'."),
    (Spanish, "be", "ser/estar",
        "WWW: Spanish has two verbs for 'be'. 'Ser' (permanent) from Latin 'esse' and 'estar' (temporary) from Latin 'stare' (to stand)."),
    (Spanish, "to", "a/para",
        "WWW: 'A' from Latin 'ad' (to, toward). 'Para' developed from Latin 'per ad' (for/toward)."),
    (Spanish, "of", "de",
        "WWW: Spanish 'de' comes directly from Latin 'de' (from, concerning), serving the same function as English 'of'."),
    (Spanish, "and", "y/e",
        "WWW: 'Y' (changes to 'e' before words starting with 'i-' sound) from Latin 'et'. Not directly related to 'and' but serves the same function."),
];

/// (language, 30% story, 50% story, full story)
pub(crate) const LESSON_1_STORIES: &[(LanguageCode, &str, &str, &str)] = &[
    (
        Dutch,
        "Today ik went to the winkel. At the store I bought melk. De milk costs me 5 euros. But I didn't have any geld. My vriend had money though, so he betaalde for me. We drank the melk together in the park. Het was lekker and refreshing on such a warm dag.",
        "Ik went to the winkel today. De store was very groot. I wanted to kopen some brood and melk. The bread was vers and smelled heerlijk. I also saw some appels that looked lekker. De man at the kassa was very aardig. He helped me with my tassen. Ik thanked him and left de winkel.",
        "Ik ging vandaag naar de winkel. De winkel was erg groot. Ik wilde brood en melk kopen. Het brood was vers en rook heerlijk. Ik zag ook appels die er lekker uitzagen. De man bij de kassa was erg aardig. Hij hielp me met mijn tassen. Ik bedankte hem en verliet de winkel.",
    ),
    (
        German,
        "Yesterday ich went to the Bäckerei. The bakery had frisches Brot. I bought ein Brot and eine Tasse Kaffee. Der coffee was sehr gut. I sat on a Bank in the park. The sun was shining and it was a schöner Tag.",
        "Ich went to the Stadt yesterday. Die city was sehr busy. Viele people were walking on the Straße. I wanted to kaufen a book from the Buchhandlung. Der shop had many interessante books. Ich chose a book about deutsche Geschichte. The history of Germany is sehr fascinating. After that, ich went to a Café and had a Stück Kuchen.",
        "Ich ging gestern in die Stadt. Die Stadt war sehr geschäftig. Viele Menschen gingen auf der Straße. Ich wollte ein Buch aus der Buchhandlung kaufen. Der Laden hatte viele interessante Bücher. Ich wählte ein Buch über deutsche Geschichte. Die Geschichte Deutschlands ist sehr faszinierend. Danach ging ich in ein Café und aß ein Stück Kuchen.",
    ),
    (
        Italian,
        "Today io went to the mercato. The market had fresh frutta. I bought alcune mele and un po' di pane. Il bread was molto buono. I ate una mela while walking casa. It was a bellissima day in the città.",
        "Io went to the ristorante yesterday sera. Il restaurant was molto elegante. The cameriere gave me the menu. Ho ordered pasta and vino rosso. La pasta was deliziosa and il wine was eccellente. After dinner, ho paid il conto and gave una mancia. Then I walked home sotto le stelle.",
        "Sono andato al ristorante ieri sera. Il ristorante era molto elegante. Il cameriere mi ha dato il menu. Ho ordinato pasta e vino rosso. La pasta era deliziosa e il vino era eccellente. Dopo cena, ho pagato il conto e ho lasciato una mancia. Poi sono tornato a casa a piedi sotto le stelle.",
    ),
    (
        Spanish,
        "Yesterday yo went to the mercado. The market had fresh frutas. I bought algunas manzanas and un poco de pan. El bread was muy bueno. I ate una manzana while walking a casa. It was a hermoso day in the ciudad.",
        "Yo went to the restaurante last noche. El restaurant was muy elegante. The camarero gave me the menú. Pedí paella and vino tinto. La paella was deliciosa and el wine was excelente. After dinner, pagué la cuenta and gave una propina. Then I walked home bajo las estrellas.",
        "Fui al restaurante anoche. El restaurante era muy elegante. El camarero me dio el menú. Pedí paella y vino tinto. La paella estaba deliciosa y el vino era excelente. Después de cenar, pagué la cuenta y dejé una propina. Luego caminé a casa bajo las estrellas.",
    ),
];

pub(crate) const HIGHLIGHT_WORDS: &[(LanguageCode, &[&str])] = &[
    (Dutch, &[
        "ik", "winkel", "melk", "de", "geld", "vriend", "betaalde", "het", "was", "lekker", "dag",
        "groot", "kopen", "brood", "vers", "heerlijk", "appels", "man", "kassa", "aardig", "tassen",
    ]),
    (German, &[
        "ich", "bäckerei", "frisches", "brot", "ein", "eine", "tasse", "kaffee", "der", "sehr",
        "gut", "bank", "schöner", "tag", "stadt", "die", "viele", "straße", "kaufen",
        "buchhandlung", "interessante", "deutsche", "geschichte", "café", "stück", "kuchen",
    ]),
    (Italian, &[
        "io", "mercato", "frutta", "alcune", "mele", "un", "po'", "di", "pane", "il", "molto",
        "buono", "una", "casa", "bellissima", "città", "ristorante", "sera", "elegante",
        "cameriere", "ho", "vino", "rosso", "la", "deliziosa", "eccellente", "conto", "mancia",
        "sotto", "stelle",
    ]),
    (Spanish, &[
        "yo", "mercado", "frutas", "algunas", "manzanas", "un", "poco", "de", "pan", "el", "muy",
        "bueno", "una", "a", "casa", "hermoso", "ciudad", "restaurante", "noche", "elegante",
        "camarero", "menú", "pedí", "paella", "vino", "tinto", "la", "deliciosa", "excelente",
        "pagué", "cuenta", "propina", "bajo", "estrellas",
    ]),
];

pub(crate) const LESSON_1_PROMPTS: &[(LanguageCode, [&str; 5])] = &[
    (Dutch, [
        "Describe your daily routine using present tense verbs.",
        "Write about your favorite food and why you like it.",
        "Describe your family members using the vocabulary from this lesson.",
        "Write about what you did yesterday using as many Dutch words as you can.",
        "Create a short dialogue between two people meeting for the first time.",
    ]),
    (German, [
        "Describe your house and the rooms in it.",
        "Write about your favorite hobby and why you enjoy it.",
        "Describe the weather today and what clothes you are wearing.",
        "Write about a trip you would like to take to Germany.",
        "Create a short shopping list for ingredients to make your favorite meal.",
    ]),
    (Italian, [
        "Describe your ideal vacation in Italy.",
        "Write about your favorite Italian food and why you like it.",
        "Describe your daily routine from morning to evening.",
        "Write about your family members and their personalities.",
        "Create a short dialogue ordering food at an Italian restaurant.",
    ]),
    (Spanish, [
        "Describe your city or town.",
        "Write about your favorite Spanish-speaking country and why you'd like to visit.",
        "Describe what you do on weekends.",
        "Write about your favorite foods and drinks.",
        "Create a short dialogue introducing yourself to a new friend.",
    ]),
];

/// (language, original, translation)
pub(crate) const PRESENT_TENSE_EXAMPLES: &[(LanguageCode, &str, &str)] = &[
    (Dutch, "Ik ga naar de winkel.", "I go to the store."),
    (Dutch, "Hij werkt in Amsterdam.", "He works in Amsterdam."),
    (Dutch, "Wij spreken Nederlands.", "We speak Dutch."),
    (Dutch, "Zij leest een boek.", "She reads a book."),
    (Dutch, "Jullie drinken koffie.", "You (plural) drink coffee."),
    (Dutch, "De kinderen spelen buiten.", "The children play outside."),
    (Dutch, "Ik woon in Nederland.", "I live in the Netherlands."),
    (Dutch, "Het regent vandaag.", "It rains today."),
    (Dutch, "Wat doe je?", "What are you doing?"),
    (Dutch, "We eten brood.", "We eat bread."),
    (German, "Ich gehe zum Markt.", "I go to the market."),
    (German, "Er arbeitet in Berlin.", "He works in Berlin."),
    (German, "Wir sprechen Deutsch.", "We speak German."),
    (German, "Sie liest ein Buch.", "She reads a book."),
    (German, "Ihr trinkt Kaffee.", "You (plural) drink coffee."),
    (German, "Die Kinder spielen draußen.", "The children play outside."),
    (German, "Ich wohne in Deutschland.", "I live in Germany."),
    (German, "Es regnet heute.", "It rains today."),
    (German, "Was machst du?", "What are you doing?"),
    (German, "Wir essen Brot.", "We eat bread."),
    (Italian, "Vado al mercato.", "I go to the market."),
    (Italian, "Lui lavora a Roma.", "He works in Rome."),
    (Italian, "Parliamo italiano.", "We speak Italian."),
    (Italian, "Lei legge un libro.", "She reads a book."),
    (Italian, "Voi bevete caffè.", "You (plural) drink coffee."),
    (Italian, "I bambini giocano fuori.", "The children play outside."),
    (Italian, "Abito in Italia.", "I live in Italy."),
    (Italian, "Oggi piove.", "Today it rains."),
    (Italian, "Cosa fai?", "What are you doing?"),
    (Italian, "Mangiamo pane.", "We eat bread."),
    (Spanish, "Voy al mercado.", "I go to the market."),
    (Spanish, "Él trabaja en Madrid.", "He works in Madrid."),
    (Spanish, "Hablamos español.", "We speak Spanish."),
    (Spanish, "Ella lee un libro.", "She reads a book."),
    (Spanish, "Vosotros bebéis café.", "You (plural) drink coffee."),
    (Spanish, "Los niños juegan afuera.", "The children play outside."),
    (Spanish, "Vivo en España.", "I live in Spain."),
    (Spanish, "Hoy llueve.", "Today it rains."),
    (Spanish, "¿Qué haces?", "What are you doing?"),
    (Spanish, "Comemos pan.", "We eat bread."),
];

/// (language, sentence with blank, answer, translation)
pub(crate) const PRESENT_TENSE_BLANKS: &[(LanguageCode, &str, &str, &str)] = &[
    (Dutch, "Ik ___ naar huis.", "ga", "I go home."),
    (Dutch, "Hij ___ een boek.", "leest", "He reads a book."),
    (Dutch, "Wij ___ Nederlands.", "spreken", "We speak Dutch."),
    (Dutch, "Zij ___ koffie.", "drinkt", "She drinks coffee."),
    (Dutch, "Jullie ___ in Amsterdam.", "wonen", "You (plural) live in Amsterdam."),
    (German, "Ich ___ nach Hause.", "gehe", "I go home."),
    (German, "Er ___ ein Buch.", "liest", "He reads a book."),
    (German, "Wir ___ Deutsch.", "sprechen", "We speak German."),
    (German, "Sie ___ Kaffee.", "trinkt", "She drinks coffee."),
    (German, "Ihr ___ in Berlin.", "wohnt", "You (plural) live in Berlin."),
];

/// (language, original, literal rendering)
pub(crate) const PRESENT_TENSE_WORD_FOR_WORD: &[(LanguageCode, &str, &str)] = &[
    (Dutch, "Ik ga morgen naar de winkel.", "I go tomorrow to the store."),
    (Dutch, "Hij werkt elke dag in Amsterdam.", "He works every day in Amsterdam."),
    (Dutch, "Wij spreken graag Nederlands.", "We speak gladly Dutch."),
    (Italian, "Ho detto alla mia mamma che non voglio mangiare.", "I said to the my mom that don't I want to eat."),
    (Italian, "Vado al mercato ogni lunedì.", "I go to the market every Monday."),
    (Italian, "Lei legge un libro interessante.", "She reads a book interesting."),
];

pub(crate) const PRESENT_PERFECT_EXERCISES: &[(LanguageCode, &str, &str, &str)] = &[
    (Dutch, "Ik heb vandaag een mooie film _____.", "gezien", "I've seen a beautiful movie today."),
    (Dutch, "Jij hebt vandaag een mooie film _____.", "gezien", "You've seen a beautiful movie today."),
    (Dutch, "Wij hebben _____ een mooie film gezien.", "gisteren", "We've seen a beautiful movie yesterday."),
    (Dutch, "Hij heeft deze ochtend een _____ gezien.", "film", "He has seen a movie this morning."),
];
