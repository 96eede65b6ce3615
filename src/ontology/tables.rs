//! Static skill dictionaries: alias table, extraction patterns, and the
//! one-level parent -> children hierarchy.
//!
//! Every string named in `SKILL_HIERARCHY` must either appear as a canonical
//! form in `SKILL_ALIASES` or be a title-case fixed point, so that
//! `normalize` maps it to itself.

/// Canonical skill -> accepted aliases (lowercase lookup keys).
pub(super) const SKILL_ALIASES: &[(&str, &[&str])] = &[
    // Programming languages
    ("Python", &["python", "python3", "python 3", "py"]),
    ("Python 2", &["python2", "python 2"]),
    ("Java", &["java", "java8", "java11", "java17", "openjdk"]),
    ("JavaScript", &["javascript", "js", "java script", "ecmascript", "es6"]),
    ("TypeScript", &["typescript", "ts", "type script"]),
    ("C++", &["c++", "cpp", "c plus plus"]),
    ("C#", &["c#", "csharp", "c sharp"]),
    ("R", &["r", "r programming"]),
    ("Go", &["go", "golang", "go lang"]),
    ("Rust", &["rust", "rust lang", "rust language"]),
    ("Scala", &["scala"]),
    ("Ruby", &["ruby", "ruby lang"]),
    // Machine learning and data science
    ("Machine Learning", &["machine learning", "ml", "machinelearning", "machine-learning"]),
    ("Deep Learning", &["deep learning", "dl", "deeplearning"]),
    ("Data Science", &["data science", "ds", "datascience"]),
    (
        "Natural Language Processing",
        &["natural language processing", "nlp"],
    ),
    ("Natural Language Understanding", &["nlu"]),
    ("Computer Vision", &["computer vision", "cv"]),
    ("PyTorch", &["pytorch", "torch"]),
    ("TensorFlow", &["tensorflow", "tf"]),
    ("Keras", &["keras"]),
    ("scikit-learn", &["scikit-learn", "sklearn", "scikit learn"]),
    ("Pandas", &["pandas"]),
    ("NumPy", &["numpy"]),
    ("XGBoost", &["xgboost", "xg boost"]),
    ("LightGBM", &["lightgbm", "light gbm"]),
    ("CatBoost", &["catboost"]),
    ("MLflow", &["mlflow", "ml flow"]),
    ("MLOps", &["mlops", "ml ops"]),
    ("HuggingFace", &["huggingface", "hugging face"]),
    ("Matplotlib", &["matplotlib"]),
    ("Seaborn", &["seaborn"]),
    // SQL and databases
    ("SQL", &["sql"]),
    ("MySQL", &["mysql", "my sql", "mariadb"]),
    ("PostgreSQL", &["postgresql", "postgres", "postgre sql"]),
    ("Microsoft SQL Server", &["mssql", "sql server", "microsoft sql server"]),
    ("Oracle SQL", &["oracle", "oracle sql"]),
    ("SQLite", &["sqlite", "sqlite3"]),
    ("MongoDB", &["mongodb", "mongo", "mongo db"]),
    ("Redis", &["redis", "redis cache"]),
    ("Cassandra", &["cassandra"]),
    ("DynamoDB", &["dynamodb", "dynamo db"]),
    ("Elasticsearch", &["elasticsearch", "elastic search"]),
    ("NoSQL", &["nosql", "no sql"]),
    // Cloud platforms
    ("AWS", &["aws", "amazon web services", "amazon aws"]),
    ("Microsoft Azure", &["azure", "microsoft azure", "ms azure"]),
    (
        "Google Cloud Platform",
        &["gcp", "google cloud", "google cloud platform"],
    ),
    ("EC2", &["ec2"]),
    ("CloudFormation", &["cloudformation", "cloud formation"]),
    ("SageMaker", &["sagemaker", "sage maker"]),
    // Web frameworks and frontend
    ("Node.js", &["node", "nodejs", "node.js", "node js"]),
    ("Django", &["django", "django rest framework", "drf"]),
    ("Flask", &["flask"]),
    ("FastAPI", &["fastapi", "fast api"]),
    ("Spring Boot", &["spring", "spring boot", "springboot"]),
    ("Express", &["express", "express.js", "expressjs"]),
    ("React", &["react", "reactjs", "react.js", "react js"]),
    ("Angular", &["angular", "angularjs", "angular.js"]),
    ("Vue.js", &["vue", "vuejs", "vue.js", "vue js"]),
    ("Next.js", &["next.js", "nextjs", "next js"]),
    ("HTML", &["html", "html5"]),
    ("CSS", &["css", "css3"]),
    ("SASS", &["sass", "scss"]),
    ("Tailwind", &["tailwind", "tailwindcss", "tailwind css"]),
    ("REST API", &["rest", "rest api", "restful api"]),
    ("GraphQL", &["graphql", "graph ql"]),
    // DevOps and tooling
    ("DevOps", &["devops", "dev ops"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["kubernetes", "k8s", "kube"]),
    ("Jenkins", &["jenkins", "jenkins ci"]),
    ("Terraform", &["terraform"]),
    ("Ansible", &["ansible"]),
    ("Helm", &["helm"]),
    ("CI/CD", &["ci/cd", "cicd", "ci cd"]),
    ("GitLab CI", &["gitlab ci", "gitlab-ci"]),
    ("GitHub Actions", &["github actions"]),
    ("Git", &["git"]),
    ("GitHub", &["github"]),
    ("GitLab", &["gitlab"]),
    // Big data
    ("Hadoop", &["hadoop"]),
    ("Apache Spark", &["spark", "apache spark"]),
    ("PySpark", &["pyspark", "py spark"]),
    ("Apache Kafka", &["kafka", "apache kafka"]),
    ("ETL", &["etl"]),
    // Analytics and other tools
    ("Tableau", &["tableau"]),
    ("Power BI", &["power bi", "powerbi"]),
    ("Microsoft Excel", &["excel", "ms excel", "microsoft excel"]),
    ("Jupyter", &["jupyter", "jupyter notebook"]),
    ("Apache Airflow", &["airflow", "apache airflow"]),
    ("Pydantic", &["pydantic"]),
];

/// Regex pattern -> canonical skill. Applied case-insensitively against
/// lowercased raw text during extraction.
pub(super) const SKILL_PATTERNS: &[(&str, &str)] = &[
    (r"\bpython\s*\d*\b", "Python"),
    (r"\bjs\b|\bjavascript\b", "JavaScript"),
    (r"\bml\b|\bmachine\s*learning\b", "Machine Learning"),
    (r"\bdl\b|\bdeep\s*learning\b", "Deep Learning"),
    (r"\bnlp\b", "Natural Language Processing"),
    (r"\bcv\b|\bcomputer\s*vision\b", "Computer Vision"),
    (r"\bk8s\b|\bkubernetes\b", "Kubernetes"),
    (r"\bpostgres\b|\bpostgresql\b", "PostgreSQL"),
    (r"\bmysql\b", "MySQL"),
    (r"\bmongo\b|\bmongodb\b", "MongoDB"),
    (r"\baws\b|\bamazon\s*web\s*services\b", "AWS"),
    (r"\bgcp\b|\bgoogle\s*cloud\b", "Google Cloud Platform"),
    (r"\bazure\b", "Microsoft Azure"),
    (r"\bdocker\b", "Docker"),
    (r"\bpytorch\b", "PyTorch"),
    (r"\btensorflow\b|\btf\b", "TensorFlow"),
    (r"\bsklearn\b|\bscikit[-\s]learn\b", "scikit-learn"),
    (r"\bpandas\b", "Pandas"),
    (r"\bnumpy\b", "NumPy"),
    (r"\bdjango\b", "Django"),
    (r"\bflask\b", "Flask"),
    (r"\breact\b|\breactjs\b", "React"),
    (r"\bangular\b", "Angular"),
    (r"\bvue\b|\bvuejs\b", "Vue.js"),
    (r"\bgit\b", "Git"),
    (r"\bjenkins\b", "Jenkins"),
    (r"\bairflow\b", "Apache Airflow"),
];

/// Parent skill -> children/specializations (canonical forms).
///
/// The relation is directional: holding a child implies the parent, never
/// the reverse, and it is expanded one level only.
pub(super) const SKILL_HIERARCHY: &[(&str, &[&str])] = &[
    (
        "Machine Learning",
        &[
            "Deep Learning",
            "Natural Language Processing",
            "Computer Vision",
            "Reinforcement Learning",
            "Supervised Learning",
            "Unsupervised Learning",
            "TensorFlow",
            "PyTorch",
            "scikit-learn",
            "Keras",
            "XGBoost",
            "LightGBM",
            "CatBoost",
            "MLflow",
            "HuggingFace",
            "Transformers",
        ],
    ),
    ("Deep Learning", &["TensorFlow", "PyTorch", "Keras", "Neural Networks"]),
    (
        "Data Science",
        &[
            "Machine Learning",
            "Data Analysis",
            "Statistics",
            "Probability",
            "Data Mining",
            "Pandas",
            "NumPy",
            "Matplotlib",
            "Seaborn",
        ],
    ),
    (
        "Frontend Development",
        &[
            "JavaScript",
            "TypeScript",
            "HTML",
            "CSS",
            "React",
            "Angular",
            "Vue.js",
            "Next.js",
            "SASS",
            "Tailwind",
        ],
    ),
    (
        "Backend Development",
        &[
            "Python",
            "Java",
            "Node.js",
            "Go",
            "Rust",
            "Ruby",
            "Django",
            "Flask",
            "FastAPI",
            "Spring Boot",
            "Express",
            "REST API",
            "GraphQL",
            "Microservices",
        ],
    ),
    (
        "Cloud Computing",
        &["AWS", "Microsoft Azure", "Google Cloud Platform", "Cloud Architecture"],
    ),
    ("AWS", &["S3", "EC2", "Lambda", "DynamoDB", "CloudFormation", "SageMaker"]),
    (
        "DevOps",
        &[
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Terraform",
            "Ansible",
            "CI/CD",
            "GitLab CI",
            "GitHub Actions",
            "Helm",
        ],
    ),
    ("Big Data", &["Hadoop", "Apache Spark", "Apache Kafka", "ETL", "PySpark"]),
    (
        "SQL",
        &["PostgreSQL", "MySQL", "Microsoft SQL Server", "Oracle SQL", "SQLite"],
    ),
    ("NoSQL", &["MongoDB", "Redis", "Cassandra", "DynamoDB", "Elasticsearch"]),
    (
        "Python",
        &[
            "Django",
            "Flask",
            "FastAPI",
            "Pandas",
            "NumPy",
            "scikit-learn",
            "PyTorch",
            "TensorFlow",
        ],
    ),
    (
        "JavaScript",
        &["React", "Angular", "Vue.js", "Node.js", "Next.js", "Express", "TypeScript"],
    ),
];
