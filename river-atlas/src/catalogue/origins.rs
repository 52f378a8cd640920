//! Sources des principales rivières sacrées de l'Inde.
//!
//! Les coordonnées sont des chaînes d'affichage (DMS ou approximations)
//! et ne sont jamais converties en nombres: les formats varient d'une
//! rivière à l'autre.

use flatset::Record;

pub const FIELD_NAME: &str = "River Name";
pub const FIELD_ORIGIN: &str = "Place of Origin (with Description)";
pub const FIELD_LATITUDE: &str = "Latitude";
pub const FIELD_LONGITUDE: &str = "Longitude";
pub const FIELD_FLOW: &str = "General Flow Direction";
pub const FIELD_FEATURES: &str = "Special Geographical Features";

/// Métadonnées de source d'une rivière
#[derive(Debug, Clone, Copy)]
pub struct RiverOrigin {
    pub name: &'static str,
    /// Lieu de source, avec description
    pub origin: &'static str,
    /// Latitude telle qu'affichée (ex: `30°55'36"N`, `Approx 31°N`)
    pub latitude: &'static str,
    /// Longitude telle qu'affichée
    pub longitude: &'static str,
    pub flow_direction: &'static str,
    /// Longueur, affluents, barrages...
    pub features: &'static str,
}

impl RiverOrigin {
    pub fn to_record(&self) -> Record {
        Record::new()
            .with(FIELD_NAME, self.name)
            .with(FIELD_ORIGIN, self.origin)
            .with(FIELD_LATITUDE, self.latitude)
            .with(FIELD_LONGITUDE, self.longitude)
            .with(FIELD_FLOW, self.flow_direction)
            .with(FIELD_FEATURES, self.features)
    }
}

pub fn origin_records() -> Vec<Record> {
    RIVER_ORIGINS.iter().map(RiverOrigin::to_record).collect()
}

/// Rivières sacrées, dans l'ordre de présentation
pub static RIVER_ORIGINS: &[RiverOrigin] = &[
    RiverOrigin {
        name: "Ganga (Ganges)",
        origin: "Gomukh (Gaumukh) - Terminus of Gangotri Glacier, meaning \"Cow's Mouth\", situated at 13,200 ft (4,023 m) in Uttarkashi district, Uttarakhand",
        latitude: "30°55'36\"N",
        longitude: "79°4'51\"E",
        flow_direction: "Northwest to Southeast (Himalayas to Bay of Bengal)",
        features: "Length: 2,525 km; Major tributaries: Yamuna, Ghaghara, Gandak, Koshi (left), Sone, Damodar (right); Forms large delta in Bengal; Passes through Haridwar, Varanasi, Patna",
    },
    RiverOrigin {
        name: "Yamuna",
        origin: "Yamunotri Glacier - Located on southwestern slopes of Bandarpunch peaks in the Lower Himalayas, Uttarkashi district, Uttarakhand",
        latitude: "31°1'21\"N",
        longitude: "78°27'18\"E",
        flow_direction: "North-Northwest to Southeast (flows parallel to Ganga, merges at Prayagraj)",
        features: "Length: 1,376 km; Major tributaries: Tons, Chambal, Sindh, Betwa, Ken; Merges with Ganga at Triveni Sangam, Prayagraj; Flows through Delhi, Mathura, Agra; Forms fertile Ganga-Yamuna Doab",
    },
    RiverOrigin {
        name: "Saraswati",
        origin: "Har-ki-Dun Glacier - Located in Bandarpunch massif, West Garhwal, Himalayas (historically); considered a mystical/underground river",
        latitude: "Approx 31°N",
        longitude: "Approx 78°30'E",
        flow_direction: "Southwest (historically flowed from Himalayas to Arabian Sea)",
        features: "Length: ~1,600 km (historical); Major tributaries: Sutlej, Drishadvati; Now mostly underground/extinct; Archaeological evidence along Ghaggar-Hakra valley; Connected ancient Indus Valley Civilization",
    },
    RiverOrigin {
        name: "Narmada",
        origin: "Amarkantak Plateau - Located in Anuppur district, Madhya Pradesh, in the Maikal Hills (Eastern Satpura range), at meeting point of Vindhya and Satpura ranges",
        latitude: "Approx 22°40'N",
        longitude: "Approx 81°45'E",
        flow_direction: "East to West (flows westward to Arabian Sea)",
        features: "Length: 1,312 km; Major tributaries: Tawa, Hiran, Barna; Flows through rift valley between Vindhya and Satpura ranges; Famous for Marble Rocks and Dhuandhar Falls near Jabalpur; Major dams: Sardar Sarovar, Narmada Sagar",
    },
    RiverOrigin {
        name: "Godavari",
        origin: "Trimbakeshwar - Located in Nashik district, Maharashtra, originating from Brahmagiri mountains in the Western Ghats at elevation of about 1,295 meters",
        latitude: "19°56'N",
        longitude: "73°32'E",
        flow_direction: "West to East (flows eastward across Deccan Plateau to Bay of Bengal)",
        features: "Length: 1,465 km; Major tributaries: Pravara, Manjra, Wardha, Wainganga; Known as \"Dakshina Ganga\" (Southern Ganges); Forms extensive delta; Passes through Nashik, Rajahmundry; Second longest river in India",
    },
    RiverOrigin {
        name: "Krishna",
        origin: "Mahabaleshwar - Located near Jor village in Satara district, Maharashtra, in the Western Ghats at elevation of about 1,300-1,337 meters",
        latitude: "Approx 17°55'N",
        longitude: "Approx 73°40'E",
        flow_direction: "West to East (flows eastward through peninsular India to Bay of Bengal)",
        features: "Length: 1,400 km; Major tributaries: Tungabhadra, Bhima, Koyna, Ghataprabha; Third longest river in India; Passes through Sangli, Vijayawada; Forms fertile delta region; Major dams: Nagarjuna Sagar, Srisailam",
    },
    RiverOrigin {
        name: "Kaveri (Cauvery)",
        origin: "Talakaveri - Located on Brahmagiri hills near Bhagamandala in Kodagu district, Karnataka, in the Western Ghats at 1,276-1,341 meters above sea level",
        latitude: "12°23'08\"N",
        longitude: "75°29'29\"E",
        flow_direction: "Northwest to Southeast (flows through Karnataka and Tamil Nadu to Bay of Bengal)",
        features: "Length: 800 km; Major tributaries: Arkavati, Bhavani, Kabini, Amaravati; Flows through Mysore, Tiruchirappalli; Forms Kaveri delta in Tamil Nadu; Known as \"Ganga of the South\"; Major dams: Krishnaraja Sagar",
    },
    RiverOrigin {
        name: "Indus (Sindhu)",
        origin: "Seng Khabab (Lion's Mouth) - Located near Mount Kailash and Mansarovar Lake in Tibet, at elevation of around 5,500 meters",
        latitude: "Approx 31°N",
        longitude: "Approx 81°30'E",
        flow_direction: "Northwest to Southwest (flows from Tibet through Ladakh to Arabian Sea)",
        features: "Length: 3,180 km; Major tributaries: Zanskar, Shyok, Kabul; One of longest rivers in Asia; Enters India through Ladakh; Associated with ancient Indus Valley Civilization; Flows mainly through Pakistan",
    },
    RiverOrigin {
        name: "Brahmaputra",
        origin: "Angsi Glacier/Chemayungdung Glacier - Located near Mount Kailash and Lake Mansarovar in Tibetan Himalayas, at elevation of 6,020 meters",
        latitude: "Approx 30°N",
        longitude: "Approx 82°N",
        flow_direction: "East to Southwest (flows from Tibet through Assam and Bangladesh to Bay of Bengal)",
        features: "Length: 2,900 km (Yarlung Tsangpo-Brahmaputra system); Major tributaries: Dibang, Lohit, Subansiri; Known as Yarlung Tsangpo in Tibet, Dihang in Arunachal Pradesh; Forms world's largest river island (Majuli); Highly braided river",
    },
    RiverOrigin {
        name: "Mahanadi",
        origin: "Sihawa Mountain - Located in Dhamtari district, Chhattisgarh, near Pharsiya village at 442 meters above sea level in Eastern Ghats extension",
        latitude: "Approx 20°45'N",
        longitude: "Approx 81°30'E",
        flow_direction: "Northwest to Southeast (flows through Chhattisgarh and Odisha to Bay of Bengal)",
        features: "Length: 900 km; Major tributaries: Seonath, Jonk, Hasdeo, Ib; Passes through Raipur, Sambalpur, Cuttack; Hirakud Dam (world's longest earthen dam); Important for Chilika Lake ecosystem",
    },
    RiverOrigin {
        name: "Tapti (Tapi)",
        origin: "Multai - Located in Betul district, Madhya Pradesh, on eastern slopes of Satpura Range at elevation of 752 meters",
        latitude: "Approx 21°52'N",
        longitude: "Approx 78°25'E",
        flow_direction: "East to West (flows westward through Maharashtra and Gujarat to Arabian Sea)",
        features: "Length: 724 km; Major tributaries: Purna, Girna, Panjhra; One of only three peninsular rivers flowing east to west; Flows parallel to Narmada; Passes through Burhanpur, Surat; Major dam: Ukai Dam",
    },
];
