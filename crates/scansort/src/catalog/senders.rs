//! Built-in sender vocabulary.
//!
//! Order matters: the first pattern that matches wins, so a more specific
//! entry must come before any entry whose pattern it also satisfies.
//! Patterns run against lowercased text. Short abbreviations are
//! word-bounded so they do not fire inside ordinary words.

pub const BUILTIN_SENDERS: &[(&str, &str)] = &[
    // Telecommunication & energy
    ("Telekom", r"deutsche\s*telekom|telekom"),
    ("Vodafone", r"vodafone"),
    ("1&1", r"1&1|1\s*und\s*1"),
    ("O2", r"\bo2\b"),
    ("E.ON", r"\be\.on\b"),
    ("RWE", r"\brwe\b"),
    ("EnBW", r"\benbw\b"),
    ("EWE", r"\bewe\b"),
    ("Stadtwerke", r"stadtwerke"),
    // Online services
    ("Amazon", r"amazon"),
    ("eBay", r"\bebay\b"),
    ("PayPal", r"paypal"),
    ("Apple", r"\bapple\b"),
    ("Google", r"google"),
    ("Microsoft", r"microsoft"),
    ("Facebook", r"facebook"),
    ("Twitter", r"twitter"),
    ("Instagram", r"instagram"),
    ("WhatsApp", r"whatsapp"),
    ("Signal", r"\bsignal\b"),
    ("Telegram", r"telegram"),
    ("Threema", r"threema"),
    // Banks
    ("Postbank", r"postbank"),
    ("Commerzbank", r"commerzbank"),
    ("Deutsche Bank", r"deutsche\s*bank"),
    ("ING", r"\bing\b"),
    ("Sparkasse", r"sparkasse"),
    ("Volksbank", r"volksbank"),
    ("DKB", r"\bdkb\b"),
    ("N26", r"\bn26\b"),
    ("Revolut", r"revolut"),
    ("Fidor", r"fidor"),
    ("HypoVereinsbank", r"hypovereinsbank"),
    ("Consorsbank", r"consorsbank"),
    ("Deutsche Kreditbank", r"deutsche\s*kreditbank"),
    // Travel & vehicles
    ("Deutsche Bahn", r"deutsche\s*bahn"),
    ("Lufthansa", r"lufthansa"),
    ("Airbus", r"airbus"),
    ("BMW", r"\bbmw\b"),
    ("Mercedes", r"mercedes"),
    ("Volkswagen", r"volkswagen"),
    ("Audi", r"\baudi\b"),
    ("Porsche", r"porsche"),
    ("Opel", r"\bopel\b"),
    ("Ford", r"\bford\b"),
    ("Renault", r"renault"),
    ("Peugeot", r"peugeot"),
    ("Citroën", r"citro[eë]n"),
    ("Fiat", r"\bfiat\b"),
    ("Toyota", r"toyota"),
    ("Nissan", r"nissan"),
    ("Honda", r"honda"),
    ("Mazda", r"mazda"),
    ("Subaru", r"subaru"),
    ("Mitsubishi", r"mitsubishi"),
    // Public authorities
    ("Bundesagentur für Arbeit", r"bundesagentur\s*f(?:ü|ue)r\s*arbeit"),
    ("Jobcenter", r"jobcenter"),
    ("Arbeitsamt", r"arbeitsamt"),
    ("Finanzamt", r"finanzamt"),
    ("Stadtverwaltung", r"stadtverwaltung"),
    ("Polizei", r"polizei"),
    ("Feuerwehr", r"feuerwehr"),
    // Aid organisations
    ("Rotes Kreuz", r"rotes\s*kreuz"),
    ("Malteser", r"malteser"),
    ("Johanniter", r"johanniter"),
    ("DRK", r"\bdrk\b"),
    ("THW", r"\bthw\b"),
    // Insurance
    ("ADAC", r"\badac\b"),
    ("Allianz", r"allianz"),
    ("HUK-Coburg", r"huk-coburg|huk\s*coburg"),
    ("DEVK", r"\bdevk\b"),
    ("AOK", r"\baok\b"),
    ("Barmer", r"barmer"),
];
