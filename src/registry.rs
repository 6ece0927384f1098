use crate::models::CompanyEntry;

/// The built-in portfolio company table. Order is the registry's insertion
/// order; filenames are assumed unique but not enforced.
pub fn portfolio_companies() -> Vec<CompanyEntry> {
    [
        ("Cologix", "cologix.png", "#003B73"),
        ("Astound Broadband", "astound-broadband.png", "#00A3E0"),
        ("CoreSite (JV)", "coresite.png", "#003B73"),
        ("Digital Edge", "digital-edge.png", "#00A3E0"),
        ("euNetworks", "eunetworks.png", "#003B73"),
        ("DELTA Fiber", "delta-fiber.png", "#00B34A"),
        ("Cirion Technologies", "cirion-technologies.png", "#003B73"),
        ("Cellnex Nordics", "cellnex-nordics.png", "#00A3E0"),
        ("Extenet", "extenet.png", "#003B73"),
        ("Intrado", "intrado.png", "#00A3E0"),
        ("GTA TeleGuam", "gta-teleguam.png", "#003B73"),
        ("Xplore Inc", "xplore-inc.png", "#00B34A"),
        ("Philippines Tower JVCo", "philippines-tower-jvco.png", "#003B73"),
        ("Princeton Digital Group", "princeton-digital-group.png", "#00A3E0"),
        ("Montera Infrastructure", "montera-infrastructure.png", "#003B73"),
        ("Clean Energy Fuels", "clean-energy-fuels.png", "#00B34A"),
        ("Venture Global Calcasieu Pass", "venture-global.png", "#00B34A"),
        ("Oryx Midstream", "oryx-midstream.png", "#00B34A"),
        (
            "Evolve Transition Infrastructure",
            "evolve-transition-infrastructure.png",
            "#00B34A",
        ),
        ("Peak Energy", "peak-energy.png", "#00B34A"),
        ("Synera Renewable Energy", "synera-renewable-energy.png", "#00B34A"),
        (
            "Coastal Virginia Offshore Wind",
            "coastal-virginia-offshore-wind.png",
            "#00B34A",
        ),
        ("Maas Energy Works", "maas-energy-works.png", "#00B34A"),
        ("KAPS", "kaps.png", "#00B34A"),
        (
            "AGP Sustainable Real Assets",
            "agp-sustainable-real-assets.png",
            "#00B34A",
        ),
        (
            "Stonepeak Island Transition",
            "stonepeak-island-transition.png",
            "#00B34A",
        ),
        ("Kingdom Energy Storage", "kingdom-energy-storage.png", "#00B34A"),
        ("TerraWind Renewables", "terrawind-renewables.png", "#00B34A"),
        ("Orsted US Onshore Wind", "orsted-us-onshore-wind.png", "#00B34A"),
        ("IOR", "ior.png", "#00B34A"),
        ("JouleTerra", "jouleterra.png", "#00B34A"),
        ("Longview Infrastructure", "longview-infrastructure.png", "#00B34A"),
        ("Lestari Cooling Energy", "lestari-cooling-energy.png", "#00B34A"),
        ("Pelican Pipeline", "pelican-pipeline.png", "#00B34A"),
        ("Repsol US Renewables", "repsol-us-renewables.png", "#00B34A"),
        ("WahajPeak", "wahajpeak.png", "#00B34A"),
        ("Woodside Louisiana LNG", "woodside-louisiana-lng.png", "#00B34A"),
        ("Lineage", "lineage.png", "#00A3E0"),
        ("TRAC Intermodal", "trac-intermodal.png", "#00A3E0"),
        ("Textainer", "textainer.png", "#00A3E0"),
        ("ATSG", "atsg.png", "#00A3E0"),
        ("The AA", "the-aa.png", "#00A3E0"),
        ("Emergent Cold LatAm", "emergent-cold-latam.png", "#00A3E0"),
        ("Seapeak", "seapeak.png", "#00A3E0"),
        ("Logistec", "logistec.png", "#00A3E0"),
        ("GeelongPort", "geelongport.png", "#00A3E0"),
        ("Rinchem", "rinchem.png", "#00A3E0"),
        ("Equalbase", "equalbase.png", "#00A3E0"),
        ("Forgital", "forgital.png", "#7C3AED"),
        ("Akumin", "akumin.png", "#7C3AED"),
        ("Arvida", "arvida.png", "#7C3AED"),
        (
            "Inspired Education Group",
            "inspired-education-group.png",
            "#7C3AED",
        ),
        ("Cosmopolitan Las Vegas", "cosmopolitan-las-vegas.png", "#F59E0B"),
        (
            "Stonepeak Aviation Platform",
            "stonepeak-aviation-platform.png",
            "#00A3E0",
        ),
        (
            "Stonepeak Infrastructure Logistics Platform",
            "stonepeak-infrastructure-logistics-platform.png",
            "#00A3E0",
        ),
    ]
    .into_iter()
    .map(|(name, filename, color)| CompanyEntry::new(name, filename, color))
    .collect()
}
