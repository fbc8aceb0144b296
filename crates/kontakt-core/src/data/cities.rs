//! German city names used to anchor five-digit postal codes.

pub(super) const CITIES: &[&str] = &[
    "Aachen", "Aalen", "Ahlen", "Arnsberg", "Aschaffenburg", "Augsburg", "Aurich",
    "Bad Homburg", "Bad Homburg vor der Höhe", "Bad Kreuznach", "Bad Oeynhausen",
    "Bad Salzuflen", "Baden-Baden", "Bamberg", "Bautzen", "Bayreuth", "Bergisch Gladbach",
    "Bergheim", "Berlin", "Bielefeld", "Bocholt", "Bochum", "Bonn", "Bottrop",
    "Brandenburg an der Havel", "Braunschweig", "Bremen", "Bremerhaven", "Bruchsal",
    "Castrop-Rauxel", "Celle", "Chemnitz", "Coburg", "Cottbus", "Cuxhaven", "Darmstadt",
    "Delmenhorst", "Dessau-Roßlau", "Detmold", "Dinslaken", "Dormagen", "Dorsten",
    "Dortmund", "Dresden", "Duisburg", "Düren", "Düsseldorf", "Eberswalde", "Emden",
    "Erftstadt", "Erfurt", "Erlangen", "Eschweiler", "Essen", "Esslingen",
    "Esslingen am Neckar", "Euskirchen", "Flensburg", "Frankfurt", "Frankfurt am Main",
    "Frankfurt (Oder)", "Frechen", "Freiburg", "Freiburg im Breisgau", "Friedrichshafen",
    "Fulda", "Fürth", "Garbsen", "Gelsenkirchen", "Gera", "Gießen", "Gladbeck",
    "Göppingen", "Görlitz", "Goslar", "Gotha", "Göttingen", "Greifswald", "Grevenbroich",
    "Gummersbach", "Gütersloh", "Hagen", "Halle", "Halle (Saale)", "Hamburg", "Hameln",
    "Hamm", "Hanau", "Hannover", "Heidelberg", "Heilbronn", "Herford", "Herne",
    "Herten", "Hilden", "Hildesheim", "Hof", "Hürth", "Ingolstadt", "Iserlohn", "Jena",
    "Kaiserslautern", "Karlsruhe", "Kassel", "Kempten", "Kerpen", "Kiel", "Kleve",
    "Koblenz", "Köln", "Koeln", "Konstanz", "Krefeld", "Landshut", "Langenfeld",
    "Langenhagen", "Leipzig", "Leverkusen", "Lingen", "Lippstadt", "Lübeck",
    "Ludwigsburg", "Ludwigshafen", "Ludwigshafen am Rhein", "Lüdenscheid", "Lüneburg",
    "Lünen", "Magdeburg", "Mainz", "Mannheim", "Marburg", "Marl", "Meerbusch",
    "Menden", "Minden", "Moers", "Mönchengladbach", "Mülheim an der Ruhr", "München",
    "Muenchen", "Münster", "Neu-Ulm", "Neubrandenburg", "Neumünster", "Neuss",
    "Neustadt an der Weinstraße", "Neuwied", "Norderstedt", "Nordhorn", "Nürnberg",
    "Nuernberg", "Oberhausen", "Offenbach", "Offenbach am Main", "Offenburg",
    "Oldenburg", "Osnabrück", "Paderborn", "Passau", "Pforzheim", "Plauen", "Potsdam",
    "Pulheim", "Ratingen", "Ravensburg", "Recklinghausen", "Regensburg", "Remscheid",
    "Reutlingen", "Rheine", "Rosenheim", "Rostock", "Rüsselsheim",
    "Rüsselsheim am Main", "Saarbrücken", "Salzgitter", "Sankt Augustin",
    "Schwäbisch Gmünd", "Schwäbisch Hall", "Schweinfurt", "Schwerin", "Siegen",
    "Sindelfingen", "Solingen", "Speyer", "Stolberg", "Stralsund", "Stuttgart",
    "Trier", "Troisdorf", "Tübingen", "Ulm", "Unna", "Velbert", "Viersen",
    "Villingen-Schwenningen", "Waiblingen", "Weimar", "Wesel", "Wetzlar", "Wiesbaden",
    "Wilhelmshaven", "Witten", "Wolfsburg", "Worms", "Wuppertal", "Würzburg",
    "Zwickau",
];
