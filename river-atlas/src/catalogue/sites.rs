//! Sites sacrés hindous sur les rivières indiennes et leurs affluents.
//!
//! Source unique de vérité pour la carte: tout autre module référence les
//! sites depuis ce registre plutôt que de les recopier.

use flatset::Record;
use geo::Point;

use crate::error::AtlasError;

pub const FIELD_RIVER: &str = "River";
pub const FIELD_SITE: &str = "Holy Site";
pub const FIELD_CITY: &str = "City";
pub const FIELD_STATE: &str = "State";
pub const FIELD_LATITUDE: &str = "Latitude";
pub const FIELD_LONGITUDE: &str = "Longitude";
pub const FIELD_SIGNIFICANCE: &str = "Significance";

/// Bornes WGS84 de la latitude
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Bornes WGS84 de la longitude
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Un site sacré situé sur une rivière
#[derive(Debug, Clone, Copy)]
pub struct HolySite {
    /// Rivière (ou confluence) sur laquelle se trouve le site
    pub river: &'static str,
    /// Nom du temple, ghat ou lieu saint
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    /// Latitude WGS84, degrés décimaux
    pub latitude: f64,
    /// Longitude WGS84, degrés décimaux
    pub longitude: f64,
    pub significance: &'static str,
}

impl HolySite {
    /// Position du site (x = longitude, y = latitude)
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Vérifie les bornes des coordonnées
    pub fn validate(&self) -> Result<(), AtlasError> {
        let (lat_min, lat_max) = LATITUDE_RANGE;
        if !(lat_min..=lat_max).contains(&self.latitude) {
            return Err(AtlasError::out_of_range(
                self.name,
                FIELD_LATITUDE,
                self.latitude,
                LATITUDE_RANGE,
            ));
        }
        let (lon_min, lon_max) = LONGITUDE_RANGE;
        if !(lon_min..=lon_max).contains(&self.longitude) {
            return Err(AtlasError::out_of_range(
                self.name,
                FIELD_LONGITUDE,
                self.longitude,
                LONGITUDE_RANGE,
            ));
        }
        Ok(())
    }

    pub fn to_record(&self) -> Record {
        let location = self.location();
        Record::new()
            .with(FIELD_RIVER, self.river)
            .with(FIELD_SITE, self.name)
            .with(FIELD_CITY, self.city)
            .with(FIELD_STATE, self.state)
            .with(FIELD_LATITUDE, location.y())
            .with(FIELD_LONGITUDE, location.x())
            .with(FIELD_SIGNIFICANCE, self.significance)
    }
}

/// Convertit des sites en enregistrements, après validation des coordonnées
pub fn to_records(sites: &[HolySite]) -> Result<Vec<Record>, AtlasError> {
    sites
        .iter()
        .map(|site| {
            site.validate()?;
            Ok(site.to_record())
        })
        .collect()
}

/// Enregistrements du registre complet
pub fn site_records() -> Result<Vec<Record>, AtlasError> {
    to_records(HOLY_SITES)
}

/// Sites sacrés, regroupés par rivière principale puis affluents.
pub static HOLY_SITES: &[HolySite] = &[
    HolySite {
        river: "Ganges",
        name: "Gangotri Temple",
        city: "Gangotri",
        state: "Uttarakhand",
        latitude: 30.99400,
        longitude: 78.94100,
        significance: "Origin shrine of the Ganga; goddess Ganga is worshipped where the Bhagirathi emerges from the glacier.",
    },
    HolySite {
        river: "Ganges",
        name: "Har Ki Pauri Ghat",
        city: "Haridwar",
        state: "Uttarakhand",
        latitude: 29.95701,
        longitude: 78.17104,
        significance: "Principal bathing ghat where the nightly Ganga Aarti and Kumbh-Mela rituals draw millions.",
    },
    HolySite {
        river: "Ganges",
        name: "Kashi Vishwanath Jyotirlinga",
        city: "Varanasi",
        state: "Uttar Pradesh",
        latitude: 25.31090,
        longitude: 83.01070,
        significance: "One of twelve Jyotirlingas; devotees gain moksha by worshipping Shiva on the river's western bank.",
    },
    HolySite {
        river: "Ganges",
        name: "Ajgaibinath Dham",
        city: "Sultanganj",
        state: "Bihar",
        latitude: 25.25239,
        longitude: 86.73431,
        significance: "Ancient temple on rock island in Ganges; central to Kanwar Yatra where devotees collect holy water.",
    },
    HolySite {
        river: "Yamuna",
        name: "Yamunotri Temple",
        city: "Yamunotri",
        state: "Uttarakhand",
        latitude: 31.01670,
        longitude: 78.45000,
        significance: "Source shrine of the Yamuna; goddess Yamuna worshipped amid hot springs at 3,291 m altitude.",
    },
    HolySite {
        river: "Yamuna",
        name: "Vishram Ghat",
        city: "Mathura",
        state: "Uttar Pradesh",
        latitude: 27.49241,
        longitude: 77.67368,
        significance: "Krishna is said to have rested here after slaying Kansa; central ghat for Yamuna Aarti.",
    },
    HolySite {
        river: "Kshipra (Shipra)",
        name: "Mahakaleshwar Jyotirlinga",
        city: "Ujjain",
        state: "Madhya Pradesh",
        latitude: 23.18272,
        longitude: 75.76776,
        significance: "One of twelve Jyotirlingas; hosts Kumbh Mela every 12 years; famous for Bhasma Aarti ritual.",
    },
    HolySite {
        river: "Kshipra (Shipra)",
        name: "Ram Ghat",
        city: "Ujjain",
        state: "Madhya Pradesh",
        latitude: 23.17946,
        longitude: 75.78467,
        significance: "Most famous ghat in Ujjain; site of daily Shipra Aarti and primary Kumbh Mela bathing spot.",
    },
    HolySite {
        river: "Kshipra (Shipra)",
        name: "Sandipani Ashram",
        city: "Ujjain",
        state: "Madhya Pradesh",
        latitude: 23.19000,
        longitude: 75.78000,
        significance: "Sage Sandipani's hermitage where Lord Krishna studied according to Hindu beliefs.",
    },
    HolySite {
        river: "Khan River",
        name: "Numerous Hindu Shrines",
        city: "Various along Khan",
        state: "Madhya Pradesh",
        latitude: 23.20000,
        longitude: 75.80000,
        significance: "Major tributary of Kshipra with hundreds of Hindu shrines along its banks.",
    },
    HolySite {
        river: "Chambal",
        name: "Bateshwar Hindu Temples",
        city: "Near Gwalior",
        state: "Madhya Pradesh",
        latitude: 26.42706,
        longitude: 78.19683,
        significance: "Group of 200 sandstone temples (8th-10th century) dedicated to Shiva, Vishnu and Shakti in Chambal valley.",
    },
    HolySite {
        river: "Chambal",
        name: "Garadia Mahadev Temple",
        city: "Kota",
        state: "Rajasthan",
        latitude: 25.18000,
        longitude: 75.83000,
        significance: "Lord Shiva temple perched on cliff overlooking Chambal River gorge with stunning valley views.",
    },
    HolySite {
        river: "Tons",
        name: "Someshwar Temple",
        city: "Saur",
        state: "Uttarakhand",
        latitude: 31.00000,
        longitude: 78.30000,
        significance: "Beautiful carved wood temple; Someshwar deity brought from Kashmir, protects entire Tons valley.",
    },
    HolySite {
        river: "Tons",
        name: "Karna Temple",
        city: "Deora",
        state: "Uttarakhand",
        latitude: 30.95000,
        longitude: 78.25000,
        significance: "Possibly only Karna temple in Uttarakhand; dedicated to Mahabharata hero, son of Sun God Surya.",
    },
    HolySite {
        river: "Tons",
        name: "Confluence at Naitwar",
        city: "Naitwar",
        state: "Uttarakhand",
        latitude: 30.90000,
        longitude: 78.20000,
        significance: "Sacred confluence where Tons is born from merger of Supin and Rupin rivers.",
    },
    HolySite {
        river: "Betwa",
        name: "Udayagiri Caves",
        city: "Near Sanchi",
        state: "Madhya Pradesh",
        latitude: 23.52000,
        longitude: 77.75000,
        significance: "5th century CE rock-cut caves with Hindu deities on Bes river, tributary of Betwa.",
    },
    HolySite {
        river: "Betwa",
        name: "Orcha Complex",
        city: "Orcha",
        state: "Madhya Pradesh",
        latitude: 25.35000,
        longitude: 78.64000,
        significance: "Historic 16th century town on Betwa banks; river revered as Vetravati symbolizing penance and purity.",
    },
    HolySite {
        river: "Dhasan",
        name: "Various Village Temples",
        city: "Bundelkhand region",
        state: "Madhya Pradesh/UP",
        latitude: 25.48000,
        longitude: 79.24000,
        significance: "Known as Dasharna in ancient times; considered holy river by local residents with sacred sites.",
    },
    HolySite {
        river: "Ken",
        name: "Chaumukh Baba",
        city: "Gumanganj",
        state: "Madhya Pradesh",
        latitude: 25.20000,
        longitude: 79.70000,
        significance: "Religious shrine at Ken causeway; river dotted with ancient historical and religious sites.",
    },
    HolySite {
        river: "Ken",
        name: "Source Shrine",
        city: "Ken Source",
        state: "Madhya Pradesh",
        latitude: 25.00000,
        longitude: 80.00000,
        significance: "Sacred shrine at Ken river source; confluence shrine where Ken meets Yamuna at Chilla Ghat.",
    },
    HolySite {
        river: "Gomti (Ganga tributary)",
        name: "Naimisaranya Temple",
        city: "Naimisaranya",
        state: "Uttar Pradesh",
        latitude: 27.31000,
        longitude: 80.15000,
        significance: "Sacred site where Gomti flows; river believed to originate from Lord Shiva's sweat; purifies sins.",
    },
    HolySite {
        river: "Gomti (Dwarka)",
        name: "Gomati Ghat",
        city: "Dwarka",
        state: "Gujarat",
        latitude: 22.23944,
        longitude: 68.96778,
        significance: "Sacred confluence where Gomti meets Arabian Sea; Lord Krishna bathed here; daughter of Sage Vashishta.",
    },
    HolySite {
        river: "Krishna",
        name: "Panchganga Mandir",
        city: "Mahabaleshwar",
        state: "Maharashtra",
        latitude: 17.91667,
        longitude: 73.65000,
        significance: "Source temple where five rivers (Krishna, Koyna, Venna, Savitri, Gayatri) originate; 4500 years old.",
    },
    HolySite {
        river: "Koyna",
        name: "Koyna Dam Temple",
        city: "Satara",
        state: "Maharashtra",
        latitude: 17.40000,
        longitude: 73.75000,
        significance: "Sacred site near Koyna Dam; rises in Mahabaleshwar and joins Krishna; significant tributary.",
    },
    HolySite {
        river: "Tungabhadra",
        name: "Sringeri Sharadamba Temple",
        city: "Sringeri",
        state: "Karnataka",
        latitude: 13.41667,
        longitude: 75.25000,
        significance: "Established by Adi Shankaracharya on Tunga banks; 108 Lingas carved along Tungabhadra at Hampi.",
    },
    HolySite {
        river: "Tungabhadra",
        name: "Mantralayam",
        city: "Mantralayam",
        state: "Andhra Pradesh",
        latitude: 15.65000,
        longitude: 77.28333,
        significance: "Samadhi of Guru Raghavendra Swamy on Tungabhadra banks; major pilgrimage site.",
    },
    HolySite {
        river: "Tungabhadra",
        name: "Harihara Temple",
        city: "Harihara",
        state: "Karnataka",
        latitude: 14.51500,
        longitude: 75.80500,
        significance: "Ancient temple dedicated to Harihareshwara on Tungabhadra banks.",
    },
    HolySite {
        river: "Tunga",
        name: "Kudali Rameshwara Temple",
        city: "Kudali",
        state: "Karnataka",
        latitude: 13.82000,
        longitude: 75.57000,
        significance: "Ancient Hoysala temple at confluence of Tunga and Bhadra rivers; known as Dakshina Varanasi.",
    },
    HolySite {
        river: "Tamraparni",
        name: "Tirunelveli Temple",
        city: "Tirunelveli",
        state: "Tamil Nadu",
        latitude: 8.71000,
        longitude: 77.76000,
        significance: "Nellaiyappar temple on sacred Tamraparni; river turns leaves copper colored; mentioned in Ramayana.",
    },
    HolySite {
        river: "Tamraparni",
        name: "Kalyana Theertham",
        city: "Papanasam",
        state: "Tamil Nadu",
        latitude: 8.70000,
        longitude: 77.37000,
        significance: "100m waterfall on Tamraparni with medicinal waters; river originates from Agasthyarkoodam.",
    },
    HolySite {
        river: "Narmada",
        name: "Narmada Udgam Mandir",
        city: "Amarkantak",
        state: "Madhya Pradesh",
        latitude: 22.82200,
        longitude: 81.75320,
        significance: "Temple at river's fountainhead; starting point for 3,000 km Narmada Parikrama pilgrimage.",
    },
    HolySite {
        river: "Narmada",
        name: "Omkareshwar Jyotirlinga",
        city: "Mandhata Island",
        state: "Madhya Pradesh",
        latitude: 22.24559,
        longitude: 76.15051,
        significance: "Sacred island shaped like Om; houses one of twelve Jyotirlingas on mid-river hill.",
    },
    HolySite {
        river: "Alaknanda",
        name: "Badrinath Temple",
        city: "Badrinath",
        state: "Uttarakhand",
        latitude: 30.74410,
        longitude: 79.49319,
        significance: "One of Char Dham temples; Alaknanda flows past this sacred Vishnu temple in Himalayas.",
    },
    HolySite {
        river: "Alaknanda",
        name: "Vishnuprayag",
        city: "Joshimath",
        state: "Uttarakhand",
        latitude: 30.55000,
        longitude: 79.56000,
        significance: "First Panch Prayag confluence where Dhauliganga meets Alaknanda; dedicated to Lord Vishnu.",
    },
    HolySite {
        river: "Alaknanda",
        name: "Karnaprayag",
        city: "Karnaprayag",
        state: "Uttarakhand",
        latitude: 30.25000,
        longitude: 79.23000,
        significance: "Third Panch Prayag where Pindar joins Alaknanda; linked to Karna from Mahabharata.",
    },
    HolySite {
        river: "Bhagirathi",
        name: "Devprayag",
        city: "Devprayag",
        state: "Uttarakhand",
        latitude: 30.14600,
        longitude: 78.59800,
        significance: "Final confluence where Alaknanda and Bhagirathi unite to form Ganga; Godly Confluence.",
    },
    HolySite {
        river: "Som/Mahi/Jakham",
        name: "Beneshwar Dham",
        city: "Dungarpur",
        state: "Rajasthan",
        latitude: 23.85000,
        longitude: 74.00000,
        significance: "Sacred confluence of three rivers; called Pushkar of Vagad; Maha Kumbh of tribals.",
    },
];
