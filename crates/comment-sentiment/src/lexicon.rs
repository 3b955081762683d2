use std::collections::HashMap;
use std::sync::LazyLock;

/// Word polarity scores in [-1.0, 1.0], tuned for casual video comments.
const POLARITY: &[(&str, f64)] = &[
    // positive
    ("absorbing", 0.4),
    ("accessible", 0.3),
    ("accurate", 0.4),
    ("addictive", 0.3),
    ("admirable", 0.6),
    ("adorable", 0.6),
    ("advanced", 0.2),
    ("adventurous", 0.3),
    ("affordable", 0.3),
    ("agree", 0.2),
    ("amazed", 0.6),
    ("amazing", 0.6),
    ("amused", 0.4),
    ("amusing", 0.5),
    ("appreciate", 0.5),
    ("appreciated", 0.5),
    ("astonishing", 0.6),
    ("attractive", 0.5),
    ("authentic", 0.4),
    ("awesome", 1.0),
    ("awesomeness", 0.9),
    ("badass", 0.4),
    ("balanced", 0.3),
    ("beautiful", 0.85),
    ("beautifully", 0.8),
    ("beauty", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("blessed", 0.6),
    ("blessing", 0.6),
    ("bliss", 0.7),
    ("bravo", 0.7),
    ("breathtaking", 0.9),
    ("bright", 0.5),
    ("brilliant", 0.9),
    ("brilliantly", 0.9),
    ("calm", 0.3),
    ("calming", 0.4),
    ("capable", 0.3),
    ("captivating", 0.6),
    ("careful", 0.2),
    ("celebrate", 0.5),
    ("champion", 0.6),
    ("charming", 0.6),
    ("cheerful", 0.6),
    ("chill", 0.3),
    ("classic", 0.3),
    ("clean", 0.3),
    ("clear", 0.1),
    ("clever", 0.5),
    ("comfortable", 0.4),
    ("comforting", 0.5),
    ("compelling", 0.5),
    ("competent", 0.4),
    ("congrats", 0.6),
    ("congratulations", 0.6),
    ("convincing", 0.4),
    ("cool", 0.35),
    ("correct", 0.3),
    ("courageous", 0.5),
    ("creative", 0.5),
    ("credible", 0.3),
    ("crisp", 0.3),
    ("cute", 0.5),
    ("dazzling", 0.7),
    ("decent", 0.2),
    ("delicious", 0.8),
    ("delight", 0.7),
    ("delighted", 0.8),
    ("delightful", 0.8),
    ("dependable", 0.4),
    ("deserve", 0.3),
    ("deserved", 0.4),
    ("detailed", 0.3),
    ("determined", 0.3),
    ("dope", 0.5),
    ("easy", 0.4),
    ("educational", 0.4),
    ("effective", 0.5),
    ("efficient", 0.4),
    ("elegant", 0.6),
    ("empowering", 0.5),
    ("encouraging", 0.5),
    ("energetic", 0.4),
    ("engaging", 0.5),
    ("enjoy", 0.4),
    ("enjoyable", 0.6),
    ("enjoyed", 0.4),
    ("enjoying", 0.4),
    ("entertaining", 0.5),
    ("enthusiastic", 0.5),
    ("epic", 0.6),
    ("essential", 0.3),
    ("excellent", 1.0),
    ("exceptional", 0.8),
    ("excited", 0.5),
    ("exciting", 0.6),
    ("exquisite", 0.8),
    ("extraordinary", 0.7),
    ("fabulous", 0.8),
    ("fair", 0.3),
    ("faithful", 0.4),
    ("famous", 0.3),
    ("fan", 0.2),
    ("fantastic", 0.4),
    ("fascinating", 0.6),
    ("fav", 0.5),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("fine", 0.4),
    ("flawless", 0.9),
    ("fortunate", 0.5),
    ("free", 0.2),
    ("fresh", 0.4),
    ("friendly", 0.4),
    ("fun", 0.3),
    ("funniest", 0.5),
    ("funny", 0.25),
    ("generous", 0.6),
    ("genius", 0.6),
    ("gentle", 0.4),
    ("genuine", 0.5),
    ("gifted", 0.6),
    ("glad", 0.5),
    ("glorious", 0.7),
    ("goat", 0.6),
    ("gold", 0.4),
    ("golden", 0.4),
    ("good", 0.7),
    ("goodness", 0.4),
    ("gorgeous", 0.7),
    ("grateful", 0.6),
    ("gratitude", 0.6),
    ("great", 0.8),
    ("greatest", 1.0),
    ("handsome", 0.5),
    ("happier", 0.6),
    ("happiest", 0.9),
    ("happiness", 0.7),
    ("happy", 0.8),
    ("harmonious", 0.5),
    ("healthy", 0.4),
    ("heartwarming", 0.7),
    ("helped", 0.4),
    ("helpful", 0.5),
    ("heroic", 0.6),
    ("hilarious", 0.5),
    ("holy", 0.2),
    ("honest", 0.5),
    ("honored", 0.5),
    ("hope", 0.3),
    ("hopeful", 0.5),
    ("hype", 0.3),
    ("hyped", 0.4),
    ("ideal", 0.6),
    ("illuminating", 0.5),
    ("impressed", 0.6),
    ("impressive", 1.0),
    ("improved", 0.4),
    ("incredible", 0.9),
    ("inspired", 0.6),
    ("inspiring", 0.7),
    ("insightful", 0.6),
    ("instructive", 0.4),
    ("intelligent", 0.5),
    ("interesting", 0.5),
    ("intriguing", 0.5),
    ("joy", 0.7),
    ("joyful", 0.8),
    ("keen", 0.3),
    ("kind", 0.6),
    ("kindness", 0.6),
    ("laugh", 0.4),
    ("laughed", 0.4),
    ("laughing", 0.4),
    ("legend", 0.4),
    ("legendary", 0.7),
    ("likable", 0.5),
    ("like", 0.2),
    ("liked", 0.3),
    ("lit", 0.4),
    ("lively", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("loving", 0.6),
    ("loves", 0.5),
    ("lucky", 0.5),
    ("magic", 0.5),
    ("magical", 0.6),
    ("magnificent", 0.9),
    ("marvelous", 0.8),
    ("masterful", 0.8),
    ("masterpiece", 0.8),
    ("memorable", 0.5),
    ("mesmerizing", 0.7),
    ("motivated", 0.5),
    ("motivating", 0.6),
    ("motivational", 0.5),
    ("neat", 0.4),
    ("nice", 0.6),
    ("nicely", 0.5),
    ("outstanding", 0.9),
    ("passionate", 0.5),
    ("peaceful", 0.5),
    ("perfect", 1.0),
    ("perfection", 0.9),
    ("perfectly", 0.9),
    ("phenomenal", 0.9),
    ("pleasant", 0.7),
    ("pleased", 0.6),
    ("pleasure", 0.6),
    ("polished", 0.5),
    ("popular", 0.3),
    ("positive", 0.5),
    ("powerful", 0.5),
    ("precious", 0.6),
    ("precise", 0.4),
    ("pretty", 0.25),
    ("productive", 0.4),
    ("professional", 0.4),
    ("proud", 0.6),
    ("pure", 0.4),
    ("quality", 0.3),
    ("recommend", 0.4),
    ("recommended", 0.5),
    ("refreshing", 0.6),
    ("relatable", 0.4),
    ("relaxing", 0.5),
    ("reliable", 0.4),
    ("remarkable", 0.7),
    ("respect", 0.3),
    ("respectful", 0.4),
    ("rich", 0.3),
    ("right", 0.2),
    ("safe", 0.3),
    ("satisfied", 0.5),
    ("satisfying", 0.5),
    ("sensational", 0.8),
    ("sharp", 0.3),
    ("shine", 0.4),
    ("simple", 0.2),
    ("sincere", 0.5),
    ("skilled", 0.5),
    ("smart", 0.5),
    ("smile", 0.5),
    ("smiling", 0.5),
    ("smooth", 0.4),
    ("solid", 0.4),
    ("soothing", 0.5),
    ("special", 0.5),
    ("spectacular", 0.8),
    ("splendid", 0.8),
    ("stellar", 0.8),
    ("strong", 0.4),
    ("stunning", 0.8),
    ("success", 0.6),
    ("successful", 0.6),
    ("superb", 1.0),
    ("supportive", 0.5),
    ("sweet", 0.5),
    ("talent", 0.6),
    ("talented", 0.7),
    ("terrific", 0.8),
    ("thank", 0.3),
    ("thankful", 0.6),
    ("thanks", 0.3),
    ("thorough", 0.4),
    ("thoughtful", 0.5),
    ("thrilled", 0.7),
    ("thrilling", 0.7),
    ("top", 0.4),
    ("touching", 0.5),
    ("tremendous", 0.7),
    ("trust", 0.4),
    ("trustworthy", 0.5),
    ("underrated", 0.2),
    ("understandable", 0.3),
    ("unique", 0.4),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("vibrant", 0.5),
    ("victory", 0.6),
    ("warm", 0.4),
    ("welcome", 0.4),
    ("well", 0.1),
    ("wholesome", 0.7),
    ("win", 0.8),
    ("winner", 0.6),
    ("wisdom", 0.5),
    ("wise", 0.5),
    ("wonderful", 1.0),
    ("worth", 0.4),
    ("worthy", 0.5),
    ("wow", 0.1),
    ("yay", 0.6),
    ("yummy", 0.6),
    // negative
    ("abandoned", -0.4),
    ("abysmal", -1.0),
    ("abuse", -0.7),
    ("abusive", -0.8),
    ("absurd", -0.5),
    ("aggressive", -0.4),
    ("agony", -0.8),
    ("alarming", -0.5),
    ("angry", -0.6),
    ("annoyed", -0.6),
    ("annoying", -0.8),
    ("anxious", -0.4),
    ("appalling", -0.9),
    ("arrogant", -0.6),
    ("ashamed", -0.6),
    ("atrocious", -1.0),
    ("awful", -1.0),
    ("awkward", -0.4),
    ("bad", -0.7),
    ("badly", -0.7),
    ("banal", -0.4),
    ("biased", -0.5),
    ("bitter", -0.5),
    ("bland", -0.4),
    ("blah", -0.3),
    ("boring", -1.0),
    ("bored", -0.6),
    ("broke", -0.3),
    ("broken", -0.4),
    ("brutal", -0.5),
    ("bullshit", -0.8),
    ("bummer", -0.5),
    ("careless", -0.5),
    ("cheap", -0.3),
    ("cheated", -0.7),
    ("cheesy", -0.3),
    ("clickbait", -0.6),
    ("clueless", -0.5),
    ("clumsy", -0.4),
    ("confused", -0.4),
    ("confusing", -0.4),
    ("corrupt", -0.7),
    ("crap", -0.8),
    ("crappy", -0.8),
    ("crash", -0.4),
    ("crazy", -0.2),
    ("creepy", -0.6),
    ("cringe", -0.6),
    ("cringey", -0.6),
    ("cringy", -0.6),
    ("crude", -0.4),
    ("cruel", -0.8),
    ("cry", -0.3),
    ("crying", -0.3),
    ("dangerous", -0.5),
    ("dead", -0.4),
    ("deceptive", -0.7),
    ("defective", -0.6),
    ("depressed", -0.6),
    ("depressing", -0.7),
    ("desperate", -0.4),
    ("destroyed", -0.6),
    ("difficult", -0.3),
    ("dirty", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disappointment", -0.7),
    ("disaster", -0.8),
    ("disastrous", -0.9),
    ("disgrace", -0.8),
    ("disgusted", -0.9),
    ("disgusting", -1.0),
    ("dishonest", -0.7),
    ("dislike", -0.5),
    ("disliked", -0.5),
    ("disrespectful", -0.6),
    ("distracting", -0.4),
    ("dull", -0.5),
    ("dumb", -0.4),
    ("dumbest", -0.8),
    ("embarrassing", -0.6),
    ("evil", -0.9),
    ("exhausting", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("fake", -0.5),
    ("false", -0.4),
    ("fraud", -0.8),
    ("frustrated", -0.6),
    ("frustrating", -0.6),
    ("garbage", -0.8),
    ("gross", -0.7),
    ("guilty", -0.4),
    ("hard", -0.2),
    ("harmful", -0.6),
    ("hate", -0.8),
    ("hated", -0.9),
    ("hateful", -0.9),
    ("hates", -0.8),
    ("hideous", -0.9),
    ("horrendous", -1.0),
    ("horrible", -1.0),
    ("horrific", -1.0),
    ("hurt", -0.5),
    ("hurts", -0.5),
    ("idiot", -0.8),
    ("idiotic", -0.8),
    ("ignorant", -0.6),
    ("ill", -0.4),
    ("illegal", -0.5),
    ("inaccurate", -0.5),
    ("incompetent", -0.7),
    ("inferior", -0.5),
    ("insane", -0.2),
    ("insult", -0.6),
    ("insulting", -0.7),
    ("irrelevant", -0.4),
    ("irritating", -0.7),
    ("junk", -0.7),
    ("lame", -0.5),
    ("lazy", -0.5),
    ("liar", -0.7),
    ("lies", -0.6),
    ("lost", -0.3),
    ("lousy", -0.7),
    ("mad", -0.5),
    ("mediocre", -0.5),
    ("meh", -0.3),
    ("mess", -0.5),
    ("messy", -0.4),
    ("mislead", -0.6),
    ("misleading", -0.6),
    ("miserable", -0.8),
    ("mistake", -0.4),
    ("mistakes", -0.4),
    ("monotonous", -0.5),
    ("nasty", -0.8),
    ("nightmare", -0.8),
    ("noisy", -0.3),
    ("nonsense", -0.6),
    ("obnoxious", -0.8),
    ("offensive", -0.7),
    ("outdated", -0.4),
    ("overrated", -0.5),
    ("pain", -0.5),
    ("painful", -0.7),
    ("pathetic", -1.0),
    ("pointless", -0.6),
    ("poor", -0.4),
    ("poorly", -0.5),
    ("problem", -0.3),
    ("problematic", -0.5),
    ("racist", -0.8),
    ("rage", -0.6),
    ("ridiculous", -0.5),
    ("rubbish", -0.7),
    ("rude", -0.6),
    ("ruin", -0.6),
    ("ruined", -0.7),
    ("sad", -0.5),
    ("sadly", -0.4),
    ("scam", -0.8),
    ("scammer", -0.8),
    ("scared", -0.5),
    ("scary", -0.5),
    ("shame", -0.5),
    ("shameful", -0.8),
    ("shit", -0.7),
    ("shitty", -0.8),
    ("sick", -0.3),
    ("silly", -0.3),
    ("sloppy", -0.5),
    ("slow", -0.3),
    ("sorry", -0.2),
    ("stolen", -0.6),
    ("stupid", -0.8),
    ("suck", -0.7),
    ("sucked", -0.7),
    ("sucks", -0.7),
    ("suffer", -0.6),
    ("suffering", -0.6),
    ("terrible", -1.0),
    ("terribly", -0.9),
    ("terrifying", -0.8),
    ("tired", -0.4),
    ("toxic", -0.8),
    ("tragic", -0.7),
    ("trash", -0.8),
    ("trashy", -0.8),
    ("ugly", -0.7),
    ("unbearable", -0.9),
    ("uncomfortable", -0.5),
    ("unclear", -0.4),
    ("unfair", -0.6),
    ("unfortunately", -0.4),
    ("unfunny", -0.6),
    ("unhappy", -0.7),
    ("unhelpful", -0.5),
    ("unprofessional", -0.6),
    ("unreliable", -0.5),
    ("unwatchable", -0.9),
    ("upset", -0.6),
    ("useless", -0.5),
    ("vile", -0.9),
    ("violent", -0.6),
    ("waste", -0.6),
    ("wasted", -0.6),
    ("weak", -0.4),
    ("weird", -0.3),
    ("worse", -0.4),
    ("worst", -1.0),
    ("worthless", -0.8),
    ("wrong", -0.5),
    ("yikes", -0.5),
];

/// Words that scale the next scored word.
const INTENSIFIERS: &[&str] = &[
    "absolutely",
    "extremely",
    "incredibly",
    "really",
    "so",
    "super",
    "too",
    "totally",
    "truly",
    "very",
];

const NEGATORS: &[&str] = &["never", "no", "nor", "not", "nothing", "dont", "cant", "wont", "isnt"];

static LEXICON: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| POLARITY.iter().copied().collect());

pub(crate) fn score(word: &str) -> Option<f64> {
    LEXICON.get(word).copied()
}

pub(crate) fn is_intensifier(word: &str) -> bool {
    INTENSIFIERS.contains(&word)
}

pub(crate) fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word)
}
