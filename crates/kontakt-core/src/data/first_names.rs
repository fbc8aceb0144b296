//! Given names used by the dictionary name pass.

pub(super) const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Aaron", "Adam", "Adrian", "Alexander", "Alexandra", "Alfred", "Alice",
    "Andrea", "Andreas", "Angela", "Anja", "Anna", "Anne", "Antonia", "Arthur",
    "Barbara", "Ben", "Benjamin", "Bernd", "Bernhard", "Bettina", "Bianca", "Birgit",
    "Brigitte", "Carl", "Carla", "Carlos", "Caroline", "Carsten", "Chantal", "Charlotte",
    "Christian", "Christiane", "Christina", "Christine", "Christoph", "Claudia", "Claus",
    "Cornelia", "Dagmar", "Daniel", "Daniela", "David", "Dennis", "Dieter", "Dietmar",
    "Dirk", "Dominik", "Doris", "Eberhard", "Edith", "Elfriede", "Elias", "Elisabeth",
    "Elke", "Ellen", "Emil", "Emily", "Emma", "Erich", "Erik", "Erika", "Ernst", "Erwin",
    "Esther", "Eva", "Evelyn", "Fabian", "Felix", "Florian", "Frank", "Franz",
    "Franziska", "Friedrich", "Gabriele", "Georg", "Gerhard", "Gertrud", "Gisela",
    "Gunnar", "Günter", "Günther", "Hanna", "Hannah", "Hannes", "Hans", "Harald",
    "Heike", "Heinrich", "Heinz", "Helga", "Helmut", "Herbert", "Hermann", "Holger",
    "Horst", "Hubert", "Hugo", "Ingo", "Ingrid", "Irene", "Iris", "Isabel", "Jan",
    "Jana", "Jane", "Janine", "Jennifer", "Jens", "Jessica", "Joachim", "Johannes",
    "John", "Jolanthe", "Jonas", "Jonathan", "Jörg", "Josef", "Julia", "Julian",
    "Juliane", "Jürgen", "Jutta", "Kai", "Karin", "Karl", "Karla", "Karolin", "Karsten",
    "Katharina", "Katja", "Katrin", "Kerstin", "Kevin", "Klaus", "Konrad", "Kristin",
    "Kurt", "Lara", "Laura", "Lea", "Lena", "Leon", "Leonie", "Lisa", "Lothar", "Luca",
    "Lukas", "Lutz", "Manfred", "Manuel", "Manuela", "Marc", "Marcel", "Marco",
    "Marcus", "Marek", "Maria", "Marianne", "Mario", "Marion", "Mark", "Markus",
    "Martha", "Martin", "Martina", "Mathias", "Matthias", "Max", "Maximilian",
    "Melanie", "Michael", "Michaela", "Miriam", "Monika", "Moritz", "Nadine", "Nadja",
    "Nicole", "Niklas", "Nils", "Nina", "Norbert", "Ola", "Olaf", "Oliver", "Olivia",
    "Patrick", "Paul", "Paula", "Peter", "Petra", "Philipp", "Pia", "Rainer", "Ralf",
    "Ralph", "Ramona", "Raphael", "Rebecca", "Regina", "Reinhard", "Renate", "Rene",
    "René", "Richard", "Rita", "Robert", "Roland", "Rolf", "Ronald", "Rosemarie",
    "Rudolf", "Sabine", "Sabrina", "Sandra", "Sara", "Sarah", "Sascha", "Sebastian",
    "Silke", "Silvia", "Simon", "Simone", "Sonja", "Stefan", "Stefanie", "Steffen",
    "Stephan", "Stephanie", "Susanne", "Sven", "Svenja", "Sylvia", "Tanja", "Thomas",
    "Thorsten", "Tim", "Timo", "Tobias", "Tom", "Torsten", "Udo", "Ulrich", "Ulrike",
    "Ursula", "Ute", "Uwe", "Vanessa", "Vera", "Verena", "Veronica", "Veronika",
    "Viktor", "Viktoria", "Volker", "Walter", "Waltraud", "Werner", "Wilhelm",
    "Wolfgang", "Yvonne", "Zoe",
];
